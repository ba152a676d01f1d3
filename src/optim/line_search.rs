use crate::Vector;

#[derive(Clone, Debug)]
pub struct BacktrackingLineSearch {
    c1: f64,
    rho: f64,
    max_iter: usize,
}

impl BacktrackingLineSearch {
    pub fn new(c1: f64, rho: f64, max_iter: usize) -> Self {
        Self { c1, rho, max_iter }
    }

    pub fn search<F>(
        &self,
        objective: &F,
        x: &Vector,
        value: f64,
        gradient: &Vector,
        direction: &Vector,
    ) -> Option<f64>
    where
        F: Fn(&Vector) -> (f64, Vector),
    {
        let slope = gradient.dot(direction);
        let mut step = 1.0;

        for _ in 0..self.max_iter {
            let candidate = x + &(direction * step);
            let (candidate_value, _) = objective(&candidate);
            if candidate_value <= value + self.c1 * step * slope {
                return Some(step);
            }
            step *= self.rho;
        }

        None
    }
}

impl Default for BacktrackingLineSearch {
    fn default() -> Self {
        Self::new(1e-4, 0.5, 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn parabola(x: &Vector) -> (f64, Vector) {
        (x[0] * x[0], array![2.0 * x[0]])
    }

    #[test]
    fn test_accepts_sufficient_decrease() {
        let ls = BacktrackingLineSearch::default();
        let x = array![1.0];
        let (value, gradient) = parabola(&x);
        let direction = -&gradient;

        // α = 1 overshoots to x = -1 with no decrease; α = 0.5 lands on 0.
        let step = ls.search(&parabola, &x, value, &gradient, &direction).unwrap();
        assert_eq!(step, 0.5);
    }

    #[test]
    fn test_ascent_direction_fails() {
        let ls = BacktrackingLineSearch::new(1e-4, 0.5, 10);
        let x = array![1.0];
        let (value, gradient) = parabola(&x);

        assert!(ls.search(&parabola, &x, value, &gradient, &gradient).is_none());
    }
}
