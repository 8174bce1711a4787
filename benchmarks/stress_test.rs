use clap::Parser;
use log::info;
use prism_core::{Metric, Store};
use rand::Rng;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vectors to load before querying
    #[arg(short, long, default_value_t = 100_000)]
    vectors: usize,

    /// Vector dimension
    #[arg(short, long, default_value_t = 128)]
    dimension: usize,

    /// Number of queries to run
    #[arg(short, long, default_value_t = 1_000)]
    queries: usize,

    /// Neighbors per query
    #[arg(short, long, default_value_t = 10)]
    k: usize,
}

fn random_vector(rng: &mut impl Rng, dimension: usize) -> Vec<f32> {
    (0..dimension).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    println!("--- PRISM EXACT-KNN BENCHMARK ---");
    println!("Vectors:    {}", args.vectors);
    println!("Dimension:  {}", args.dimension);
    println!("Queries:    {}", args.queries);
    println!("Top-K:      {}", args.k);
    println!("---------------------------------\n");

    let mut rng = rand::thread_rng();
    let mut store = Store::new(args.dimension, Metric::Cosine);

    let load_start = Instant::now();
    for i in 0..args.vectors {
        let vector = random_vector(&mut rng, args.dimension);
        store.insert(&format!("vec-{}", i), &vector)?;
    }
    let load_time = load_start.elapsed();
    let load_rate = args.vectors as f64 / load_time.as_secs_f64();
    info!(
        "Load phase complete: {} vectors resident in {:.2?}",
        store.len(),
        load_time
    );

    let mut latencies = Vec::with_capacity(args.queries);
    let query_start = Instant::now();
    let mut hits_total = 0usize;
    for _ in 0..args.queries {
        let query = random_vector(&mut rng, args.dimension);
        let start = Instant::now();
        let hits = store.query(&query, args.k)?;
        latencies.push(start.elapsed());
        hits_total += hits.len();
    }
    let query_time = query_start.elapsed();
    let throughput = args.queries as f64 / query_time.as_secs_f64();

    latencies.sort();
    let count = latencies.len();
    let avg = if count > 0 {
        latencies.iter().sum::<Duration>() / count as u32
    } else {
        Duration::from_secs(0)
    };
    let p50 = if count > 0 { latencies[count / 2] } else { Duration::from_secs(0) };
    let p99 = if count > 0 {
        latencies[(count as f64 * 0.99) as usize]
    } else {
        Duration::from_secs(0)
    };
    let max = if count > 0 { latencies[count - 1] } else { Duration::from_secs(0) };

    println!("\n==================================================");
    println!("            PRISM BENCHMARK RECEIPT               ");
    println!("==================================================");
    println!(" [ BLOCK 1: LOAD PHASE ]");
    println!(" Inserted:     {} vectors", store.len());
    println!(" Wall Clock:   {:.2?}", load_time);
    println!(" Rate:         {:.2} inserts/sec", load_rate);
    println!("--------------------------------------------------");
    println!(" [ BLOCK 2: QUERY PHASE ]");
    println!(" Queries:      {}", args.queries);
    println!(" Hits:         {}", hits_total);
    println!(" Wall Clock:   {:.2?}", query_time);
    println!(" Throughput:   {:.2} queries/sec", throughput);
    println!("--------------------------------------------------");
    println!(" [ BLOCK 3: STATISTICAL LATENCY ]");
    println!(" Average:      {:.2?}", avg);
    println!(" P50 (Median): {:.2?}", p50);
    println!(" P99 (Tail):   {:.2?}", p99);
    println!(" Max/Jitter:   {:.2?}", max);
    println!("==================================================\n");

    Ok(())
}
