use prism_core::metric::simd;
use std::time::Instant;

fn main() {
    let n = 128; // Standard embedding dimension
    let iterations = 10_000_000;

    let v1 = vec![1.2f32; n];
    let v2 = vec![0.8f32; n];

    println!("Benchmarking scalar dot product ({} iterations)...", iterations);
    let start_scalar = Instant::now();
    let mut sum_scalar = 0.0;
    for _ in 0..iterations {
        unsafe {
            sum_scalar += simd::scalar_dot(v1.as_ptr(), v2.as_ptr(), n);
        }
    }
    let duration_scalar = start_scalar.elapsed();
    println!("Scalar: {:?} (Dummy sum: {})", duration_scalar, sum_scalar);

    println!("Benchmarking dispatched kernel...");
    let kernel = simd::vector_kernel();
    let start_kernel = Instant::now();
    let mut sum_kernel = 0.0;
    for _ in 0..iterations {
        unsafe {
            sum_kernel += kernel(v1.as_ptr(), v2.as_ptr(), n);
        }
    }
    let duration_kernel = start_kernel.elapsed();
    println!("Kernel: {:?} (Dummy sum: {})", duration_kernel, sum_kernel);

    println!(
        "\nSpeedup (dispatched vs scalar): {:.2}x",
        duration_scalar.as_secs_f64() / duration_kernel.as_secs_f64()
    );
}
