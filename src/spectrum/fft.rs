//! In-place radix-2 FFT
//!
//! Iterative Cooley-Tukey decimation-in-time transform used by the framed
//! spectral analyzer: bit-reversal permutation followed by butterfly stages
//! with the standard twiddle-factor recurrence (`angle = -2pi/len`). Forward
//! transform only, no normalization; callers only take magnitudes.
//!
//! The buffers are exclusively owned scratch space for the duration of one
//! call and are never shared across frames.

/// Compute an in-place forward FFT over paired real/imaginary buffers
///
/// # Arguments
///
/// * `real` - Real parts, mutated in place
/// * `imag` - Imaginary parts, mutated in place (all zero for real input)
///
/// # Panics
///
/// Panics if the buffers differ in length or the length is not a power of
/// two. Both are caller contract violations, not properties of the audio
/// data, so they are defended with assertions rather than silently tolerated.
pub fn fft_in_place(real: &mut [f32], imag: &mut [f32]) {
    assert_eq!(
        real.len(),
        imag.len(),
        "real/imaginary buffers must have equal length"
    );
    let n = real.len();
    assert!(n.is_power_of_two(), "FFT length must be a power of two");

    if n <= 1 {
        return;
    }

    // Bit-reversal permutation of both buffers
    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            real.swap(i, j);
            imag.swap(i, j);
        }
    }

    // Iterative butterfly stages for len = 2, 4, ..., n
    let mut len = 2;
    while len <= n {
        let angle = -2.0 * std::f32::consts::PI / len as f32;
        let (w_imag, w_real) = angle.sin_cos();

        for start in (0..n).step_by(len) {
            let mut cur_real = 1.0f32;
            let mut cur_imag = 0.0f32;

            for k in 0..len / 2 {
                let a = start + k;
                let b = start + k + len / 2;

                let t_real = cur_real * real[b] - cur_imag * imag[b];
                let t_imag = cur_real * imag[b] + cur_imag * real[b];

                real[b] = real[a] - t_real;
                imag[b] = imag[a] - t_imag;
                real[a] += t_real;
                imag[a] += t_imag;

                let next_real = cur_real * w_real - cur_imag * w_imag;
                cur_imag = cur_real * w_imag + cur_imag * w_real;
                cur_real = next_real;
            }
        }

        len <<= 1;
    }
}
