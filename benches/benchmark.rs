use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wideint::{I128, U128};

fn bench_unsigned(c: &mut Criterion) {
    let a = U128::from((0x243F_6A88_85A3_08D3, 0x1319_8A2E_0370_7344));
    let b = U128::from((0xA409_3822_299F_31D0, 0x082E_FA98_EC4E_6C89));

    c.bench_function("u128_add", |bench| {
        bench.iter(|| black_box(a) + black_box(b))
    });
    c.bench_function("u128_widening_mul", |bench| {
        bench.iter(|| black_box(a).widening_mul(black_box(b)))
    });
    c.bench_function("u128_div_rem", |bench| {
        bench.iter(|| black_box(a).div_rem(black_box(b)))
    });
    c.bench_function("u128_to_string", |bench| {
        bench.iter(|| black_box(a).to_string())
    });
    c.bench_function("u128_parse_decimal", |bench| {
        bench.iter(|| U128::from_str_radix(black_box("255205117525778367879297282025819265747"), 10))
    });
    c.bench_function("u128_to_f64", |bench| bench.iter(|| black_box(a).to_f64()));
}

fn bench_signed(c: &mut Criterion) {
    let a = I128::from(-0x243F_6A88_85A3_08D3_1319_8A2Ei128);
    let b = I128::from(0x082E_FA98_EC4E_6C89_4528_21E6i128);

    c.bench_function("i128_mul_checked", |bench| {
        bench.iter(|| black_box(a).checked_mul(black_box(b)))
    });
    c.bench_function("i128_div_rem", |bench| {
        bench.iter(|| black_box(a).div_rem(black_box(b)))
    });
    c.bench_function("i128_to_string", |bench| {
        bench.iter(|| black_box(a).to_string())
    });
    c.bench_function("i128_from_f64", |bench| {
        bench.iter(|| I128::from_f64(black_box(-2.1267647932558653e37)))
    });
}

criterion_group!(benches, bench_unsigned, bench_signed);
criterion_main!(benches);
