#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// An operand belongs to a different group than the operation expects.
    #[error("TypeConflict: {0}")]
    TypeConflict(String),
    /// A quotient was requested by a subgroup that is not normal in the dividend.
    #[error("NormalityViolation: {0}")]
    NormalityViolation(String),

    #[error("Generator index {index} is out of range for a subgroup with {count} generators")]
    GeneratorIndexOutOfRange { index: i64, count: usize },
}
