use wormseg_core::{Error, clamp_index};

/// Convolves an integer signal with an integer kernel, clamping reads at the
/// borders to the first/last sample.
///
/// `out[i] = sum_k kernel[k] * signal[clamp(i + k - radius)]`. Sums are
/// accumulated in `i64` and left unnormalized.
pub fn convolve_i32_clamp(
    signal: &[i32],
    kernel: &[i32],
    radius: usize,
    out: &mut [i64],
) -> Result<(), Error> {
    if out.len() != signal.len() {
        return Err(Error::SizeMismatch {
            expected: signal.len(),
            actual: out.len(),
        });
    }
    if kernel.len() != 2 * radius + 1 {
        return Err(Error::SizeMismatch {
            expected: 2 * radius + 1,
            actual: kernel.len(),
        });
    }

    let n = signal.len();
    if n == 0 {
        return Ok(());
    }

    // Left border, interior, right border.
    let interior_start = radius.min(n);
    let interior_end = n.saturating_sub(radius).max(interior_start);

    for (i, out_i) in out.iter_mut().enumerate().take(interior_start) {
        *out_i = clamped_tap_sum(signal, kernel, radius, i);
    }

    for (i, out_i) in out
        .iter_mut()
        .enumerate()
        .take(interior_end)
        .skip(interior_start)
    {
        let window = &signal[i - radius..=i + radius];
        *out_i = window
            .iter()
            .zip(kernel.iter())
            .map(|(&s, &k)| i64::from(s) * i64::from(k))
            .sum();
    }

    for (i, out_i) in out.iter_mut().enumerate().skip(interior_end) {
        *out_i = clamped_tap_sum(signal, kernel, radius, i);
    }

    Ok(())
}

fn clamped_tap_sum(signal: &[i32], kernel: &[i32], radius: usize, i: usize) -> i64 {
    let n = signal.len();
    let mut acc = 0i64;
    for (k, &kv) in kernel.iter().enumerate() {
        let idx = i as isize + k as isize - radius as isize;
        if let Some(idx) = clamp_index(idx, n) {
            acc += i64::from(signal[idx]) * i64::from(kv);
        }
    }
    acc
}
