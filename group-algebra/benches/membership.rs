use criterion::{Criterion, black_box, criterion_group, criterion_main};
use group_algebra::{Group, GroupElement, Integers, Quotient, Subgroup};

fn bench_membership(c: &mut Criterion) {
    // 1) one-time setup: 2Z > 4Z > 8Z, queried at the 4Z level
    let two = Subgroup::new(&Integers, vec![Integers.value(2)]).expect("build 2Z");
    let four = Subgroup::new(&two, vec![two.wrap(Integers.value(4)).expect("wrap 4")])
        .expect("build 4Z");
    let eight_generator = four
        .wrap(two.wrap(Integers.value(8)).expect("wrap 8"))
        .expect("wrap 8 into 4Z");
    let eight = Subgroup::new(&four, vec![eight_generator]).expect("build 8Z");
    let candidate = four
        .wrap(two.wrap(Integers.value(1_000_000)).expect("wrap candidate"))
        .expect("wrap candidate into 4Z");

    c.bench_function("nested_membership", |b| {
        b.iter(|| {
            let member = four
                .subgroup_member(black_box(&candidate), black_box(&eight))
                .expect("membership");
            black_box(member);
        })
    });
}

fn bench_coset_equality(c: &mut Criterion) {
    let divisor = Subgroup::new(&Integers, vec![Integers.value(12), Integers.value(18)])
        .expect("build 6Z");
    let quotient = Quotient::new(&Integers, &divisor).expect("build Z/6");
    let a = quotient.element(1).expect("coset of 1");
    let b = quotient.element(601).expect("coset of 601");

    c.bench_function("coset_equality", |bencher| {
        bencher.iter(|| {
            let equal = black_box(&a).equals(black_box(&b)).expect("equality");
            black_box(equal);
        })
    });
}

criterion_group!(benches, bench_membership, bench_coset_equality);
criterion_main!(benches);
