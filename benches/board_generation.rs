use criterion::{black_box, criterion_group, criterion_main, Criterion};
use speech_bingo::core::{build_layout, check_win, generate, GeneratorConfig, Mulberry32, WordPool};

const POOL: &str = "Ord;Odds\nDanmark;1,5\nFamilie;1,8\nTak;1,2\nFremtid;2,5\nSammenhold;3\n\
    Grønland;3,5\nFærøerne;4\nUkraine;4,5\nKlima;5\nDronningen;6\nForsvar;7\nEuropa;7,5\n\
    Kunstig intelligens;12\nFodbold;15\nInflation;25\nMette;40\nTrump;80\nSkål;101\n\
    Rumfart;125\nDinosaur;150\n";

fn bench_generate(c: &mut Criterion) {
    let pool = WordPool::parse(POOL).unwrap();
    let config = GeneratorConfig::default();

    c.bench_function("generate_board", |b| {
        b.iter(|| generate(black_box(&pool), black_box("test1234"), &config))
    });
}

fn bench_layout(c: &mut Criterion) {
    let mut rng = Mulberry32::new(12345);

    c.bench_function("build_layout", |b| b.iter(|| build_layout(&mut rng)));
}

fn bench_check_win(c: &mut Criterion) {
    let pool = WordPool::parse(POOL).unwrap();
    let mut board = generate(&pool, "test1234", &GeneratorConfig::default());
    for idx in [0, 5, 10] {
        board.toggle(idx);
    }

    c.bench_function("check_win", |b| {
        b.iter(|| check_win(black_box(board.cells())))
    });
}

criterion_group!(benches, bench_generate, bench_layout, bench_check_win);
criterion_main!(benches);
