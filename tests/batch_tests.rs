//! Print batch tests

use std::collections::HashSet;

use speech_bingo::core::{generate, generate_batch, GeneratorConfig, UuidSeedSource, WordPool};
use speech_bingo::types::MAX_PRINT_BOARDS;

fn pool() -> WordPool {
    WordPool::parse(
        "Ord;Odds\nDanmark;1,5\nFamilie;1,8\nTak;1,2\nFremtid;2,5\nSammenhold;3\n\
         Grønland;3,5\nUkraine;4,5\nKlima;5\nForsvar;7\nEuropa;7,5\nSkål;101\nRumfart;125\n",
    )
    .unwrap()
}

#[test]
fn test_default_print_run_of_six() {
    let pool = pool();
    let config = GeneratorConfig::default();
    let job = generate_batch(&pool, 6, &config, &mut UuidSeedSource);

    assert_eq!(job.len(), 6);
    assert_eq!(job.seeds.len(), job.boards.len());

    let distinct: HashSet<&String> = job.seeds.iter().collect();
    assert_eq!(distinct.len(), 6);

    for (seed, board) in job.iter() {
        assert_eq!(seed.len(), 8);
        assert_eq!(board, &generate(&pool, seed, &config));
    }
}

#[test]
fn test_count_is_clamped() {
    let pool = pool();
    let config = GeneratorConfig::default();

    assert_eq!(generate_batch(&pool, 0, &config, &mut UuidSeedSource).len(), 1);
    assert_eq!(
        generate_batch(&pool, 1000, &config, &mut UuidSeedSource).len(),
        MAX_PRINT_BOARDS
    );
}

#[test]
fn test_print_job_json() {
    let job = generate_batch(&pool(), 2, &GeneratorConfig::default(), &mut UuidSeedSource);
    let json = serde_json::to_value(&job).unwrap();
    assert_eq!(json["seeds"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(json["boards"].as_array().map(|a| a.len()), Some(2));
}
