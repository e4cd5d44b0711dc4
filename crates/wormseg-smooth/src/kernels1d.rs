use wormseg_core::Error;

/// 1D Gaussian kernel with integer weights.
///
/// Conventions:
/// - `radius = floor(3*sigma) + 1`, `len = 2*radius + 1`.
/// - `weights[k] = round(g(k - radius) / g(radius))` with
///   `g(x) = exp(-x^2 / (2*sigma^2))`, so the outermost taps are `1`.
/// - `norm` is the sum of the weights.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernelI32 {
    pub sigma: f64,
    pub radius: usize,
    pub weights: Vec<i32>,
    pub norm: i64,
}

impl GaussianKernelI32 {
    pub fn new(sigma: f64) -> Result<Self, Error> {
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(Error::InvalidParameter {
                name: "sigma",
                reason: format!("must be > 0 and finite, got {sigma}"),
            });
        }

        let radius = (3.0 * sigma).floor() as usize + 1;
        let len = 2 * radius + 1;
        let two_sigma2 = 2.0 * sigma * sigma;
        let r = radius as f64;
        let edge = (-(r * r) / two_sigma2).exp();

        let mut weights = Vec::with_capacity(len);
        let mut norm = 0i64;
        for k in 0..len {
            let x = k as f64 - r;
            let w = ((-(x * x) / two_sigma2).exp() / edge + 0.5).floor();
            if !w.is_finite() || w > f64::from(i32::MAX) {
                return Err(Error::InvalidParameter {
                    name: "sigma",
                    reason: format!("kernel weight overflows i32 for sigma {sigma}"),
                });
            }
            let w = w as i32;
            norm += i64::from(w);
            weights.push(w);
        }

        Ok(Self {
            sigma,
            radius,
            weights,
            norm,
        })
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
