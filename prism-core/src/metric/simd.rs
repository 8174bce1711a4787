#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Function pointer signature for the dot-product hot path.
pub type SimdFunc = unsafe fn(*const f32, *const f32, usize) -> f32;

/// The reference kernel. Plain loop for hardware without AVX2, and the
/// baseline that the intrinsic kernel is verified against.
pub unsafe fn scalar_dot(a: *const f32, b: *const f32, n: usize) -> f32 {
    let mut acc = 0.0f32;
    for i in 0..n {
        acc += (*a.add(i)) * (*b.add(i));
    }
    acc
}

/// The AVX2 intrinsic kernel.
/// 256-bit YMM registers with Fused Multiply-Add, two independent
/// accumulator chains to hide FMA latency.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2", enable = "fma")]
pub unsafe fn avx2_dot(a: *const f32, b: *const f32, n: usize) -> f32 {
    let mut acc0 = _mm256_setzero_ps();
    let mut acc1 = _mm256_setzero_ps();

    let mut i = 0;
    while i + 16 <= n {
        let va0 = _mm256_loadu_ps(a.add(i));
        let vb0 = _mm256_loadu_ps(b.add(i));
        acc0 = _mm256_fmadd_ps(va0, vb0, acc0);

        let va1 = _mm256_loadu_ps(a.add(i + 8));
        let vb1 = _mm256_loadu_ps(b.add(i + 8));
        acc1 = _mm256_fmadd_ps(va1, vb1, acc1);

        i += 16;
    }

    while i + 8 <= n {
        let va = _mm256_loadu_ps(a.add(i));
        let vb = _mm256_loadu_ps(b.add(i));
        acc0 = _mm256_fmadd_ps(va, vb, acc0);
        i += 8;
    }

    acc0 = _mm256_add_ps(acc0, acc1);

    // Horizontal reduction to a single f32
    let upper = _mm256_extractf128_ps(acc0, 1);
    let lower = _mm256_castps256_ps128(acc0);
    let sum128 = _mm_add_ps(upper, lower);
    let sum_h = _mm_hadd_ps(sum128, sum128);
    let final_vector = _mm_hadd_ps(sum_h, sum_h);

    let mut result = _mm_cvtss_f32(final_vector);

    // Tail (n % 8)
    while i < n {
        result += (*a.add(i)) * (*b.add(i));
        i += 1;
    }

    result
}

/// The dispatcher. Resolved once per store at construction.
pub fn vector_kernel() -> SimdFunc {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
            return avx2_dot;
        }
    }

    scalar_dot
}
