//! Trait definitions
use rand::Rng;

/// A distribution that can be drawn from.
pub trait Sampleable<X> {
    /// Single draw from the distribution
    ///
    /// # Example
    ///
    /// ```
    /// use mcpi::dist::Uniform;
    /// use mcpi::traits::Sampleable;
    ///
    /// let mut rng = rand::thread_rng();
    /// let u = Uniform::symmetric(2.0).unwrap();
    ///
    /// let x: f64 = u.draw(&mut rng);
    /// assert!((-2.0..=2.0).contains(&x));
    /// ```
    fn draw<R: Rng>(&self, rng: &mut R) -> X;

    /// Multiple draws of the distribution, in the order they were drawn
    fn sample<R: Rng>(&self, n: usize, mut rng: &mut R) -> Vec<X> {
        (0..n).map(|_| self.draw(&mut rng)).collect()
    }
}

pub trait InverseCdf<X> {
    /// The value of the `x` at the given probability in the CDF
    fn invcdf(&self, p: f64) -> X;
}
