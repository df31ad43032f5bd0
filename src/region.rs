//! Formulas describing axis-aligned regions of the sample space.
//!
//! A box is the conjunction of a lower and an upper bound predicate on each axis, so the
//! robustness of a sample is its distance to the nearest face of the box: positive inside,
//! negative outside and zero on the boundary.
//!
//! # Examples
//!
//! ```rust
//! use stl_rho::region::in_rectangle;
//! use stl_rho::Signal;
//!
//! let obstacle = in_rectangle(3.0, 5.0, 4.0, 6.0);
//! let signal = Signal::from([[4.0, 5.5], [0.0, 0.0]]);
//!
//! assert_eq!(obstacle.robustness(&signal, 0), Ok(0.5));
//! assert_eq!(obstacle.robustness(&signal, 1), Ok(-4.0));
//! ```

use nonempty::{nonempty, NonEmpty};

use crate::formula::Formula;
use crate::predicate::Predicate;

/// Formula holding when every component `i` of a sample lies in `bounds[i] = (lower, upper)`.
///
/// Samples with fewer components than there are bounds fail to evaluate with
/// [`Error::DimensionMismatch`](crate::Error::DimensionMismatch). An axis with `lower > upper` is
/// never satisfied.
pub fn in_box(bounds: NonEmpty<(f64, f64)>) -> Formula {
    let NonEmpty { head, tail } = bounds;

    tail.into_iter()
        .enumerate()
        .fold(within(0, head), |region, (offset, axis)| region.and(&within(offset + 1, axis)))
}

fn within(index: usize, (lower, upper): (f64, f64)) -> Formula {
    let above = Formula::from(Predicate::component(index, lower));
    let below = Formula::from(Predicate::upper_bound(index, upper));

    above.and(&below)
}

/// Formula holding when the first two components of a sample lie in `[xmin, xmax] × [ymin, ymax]`.
pub fn in_rectangle(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Formula {
    in_box(nonempty![(xmin, xmax), (ymin, ymax)])
}

#[cfg(test)]
mod tests {
    use nonempty::nonempty;

    use super::{in_box, in_rectangle};
    use crate::error::Error;
    use crate::signal::Signal;

    #[test]
    fn rectangle() -> Result<(), Error> {
        let goal = in_rectangle(7.0, 8.0, 8.0, 9.0);
        let signal = Signal::from([[7.5, 8.25], [8.0, 9.0], [6.0, 8.5], [7.5, 12.0]]);

        assert_eq!(goal.robustness(&signal, 0)?, 0.25);
        assert_eq!(goal.robustness(&signal, 1)?, 0.0);
        assert_eq!(goal.robustness(&signal, 2)?, -1.0);
        assert_eq!(goal.robustness(&signal, 3)?, -3.0);

        Ok(())
    }

    #[test]
    fn box_dimensions() -> Result<(), Error> {
        let unit = in_box(nonempty![(0.0, 1.0), (0.0, 1.0), (0.0, 1.0)]);
        let inside = Signal::from([[0.5, 0.25, 0.75]]);
        let flat = Signal::from([[0.5, 0.5]]);

        assert_eq!(unit.robustness(&inside, 0)?, 0.25);
        assert_eq!(unit.robustness(&flat, 0), Err(Error::dimension_mismatch(3, 2)));

        let interval = in_box(nonempty![(2.0, 4.0)]);
        assert_eq!(interval.robustness(&Signal::scalar([5.0]), 0)?, -1.0);

        Ok(())
    }

    #[test]
    fn empty_axis() -> Result<(), Error> {
        let empty = in_box(nonempty![(1.0, 0.0)]);

        for x in [-1.0, 0.0, 0.5, 1.0, 2.0] {
            assert!(empty.robustness(&Signal::scalar([x]), 0)? < 0.0);
        }

        Ok(())
    }
}
