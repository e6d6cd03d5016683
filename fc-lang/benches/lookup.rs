use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fc_lang::{decode, fc_lang_find, fc_lang_find_best, get_fc_lang_data};

fn lookup(c: &mut Criterion) {
    c.bench_function("find_all", |b| {
        b.iter(|| {
            for record in get_fc_lang_data() {
                black_box(fc_lang_find(black_box(record.lang_code())));
            }
        })
    });
    c.bench_function("find_missing", |b| {
        b.iter(|| fc_lang_find(black_box("__nonexistent__")))
    });
    c.bench_function("find_best_locale", |b| {
        b.iter(|| fc_lang_find_best(black_box("ku_IQ.UTF-8")))
    });
}

fn decode_all(c: &mut Criterion) {
    c.bench_function("decode_all", |b| {
        b.iter(|| {
            for record in get_fc_lang_data() {
                black_box(decode(record.char_set(), record.char_set_sz() as usize));
            }
        })
    });
}

criterion_group!(benches, lookup, decode_all);
criterion_main!(benches);
