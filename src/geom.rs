//! Orientation predicates over `[x, y]` coordinates.

use num_traits::Signed;

/// Coordinate type accepted by the triangulator.
///
/// Implemented for the signed integers (`i8` to `i128`, `isize`) and for `f32` and `f64`.
/// Integer coordinates are evaluated exactly; the checked operations let the triangulator reject
/// inputs whose cross products would not fit the type.
pub trait Scalar: Signed + Copy + PartialOrd {
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }
            #[inline]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$t>::checked_sub(self, rhs)
            }
            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$t>::checked_mul(self, rhs)
            }
        }
    )*};
}

// floats saturate to infinity instead of wrapping
macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
            #[inline]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }
            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }
        }
    )*};
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize);
impl_scalar_float!(f32, f64);

/// Rotational direction of a ring of points, in a y-up coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

impl Winding {
    /// Winding of a closed ring, or `None` if its signed area is zero.
    pub fn of<T: Scalar>(points: &[[T; 2]]) -> Option<Self> {
        Self::from_sign(signed_area(points))
    }

    /// Winding of the triangle `a -> b -> c`, or `None` if the points are collinear.
    pub fn of_triangle<T: Scalar>(a: [T; 2], b: [T; 2], c: [T; 2]) -> Option<Self> {
        Self::from_sign(signed_turn(a, b, c))
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::CounterClockwise => Self::Clockwise,
            Self::Clockwise => Self::CounterClockwise,
        }
    }

    fn from_sign<T: Scalar>(v: T) -> Option<Self> {
        if v > T::zero() {
            Some(Self::CounterClockwise)
        } else if v < T::zero() {
            Some(Self::Clockwise)
        } else {
            None
        }
    }
}

/// Twice the signed area of the triangle `a`, `b`, `c`.
///
/// Positive when the path `a -> b -> c` turns left, negative when it turns right and zero when
/// the three points are collinear.
#[inline]
pub fn signed_turn<T: Scalar>([ax, ay]: [T; 2], [bx, by]: [T; 2], [cx, cy]: [T; 2]) -> T {
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}

/// Like [`signed_turn`], but `None` if any intermediate value overflows `T`.
pub fn checked_turn<T: Scalar>(
    [ax, ay]: [T; 2],
    [bx, by]: [T; 2],
    [cx, cy]: [T; 2],
) -> Option<T> {
    let l = bx.checked_sub(ax)?.checked_mul(cy.checked_sub(ay)?)?;
    let r = by.checked_sub(ay)?.checked_mul(cx.checked_sub(ax)?)?;
    l.checked_sub(r)
}

/// Check if `p` lies inside the triangle `a`, `b`, `c` or on its boundary.
///
/// The triangle may be given in either winding. A degenerate (collinear) triangle contains only
/// the points of the segment it spans.
pub fn point_in_triangle<T: Scalar>(p: [T; 2], a: [T; 2], b: [T; 2], c: [T; 2]) -> bool {
    let d1 = signed_turn(a, b, p);
    let d2 = signed_turn(b, c, p);
    let d3 = signed_turn(c, a, p);
    let zero = T::zero();
    if d1 == zero && d2 == zero && d3 == zero {
        return in_bbox(p, a, b, c);
    }
    let has_neg = d1 < zero || d2 < zero || d3 < zero;
    let has_pos = d1 > zero || d2 > zero || d3 > zero;
    !(has_neg && has_pos)
}

/// check if `p` lies within the bounding box of `a`, `b`, `c`
fn in_bbox<T: Scalar>([px, py]: [T; 2], a: [T; 2], b: [T; 2], c: [T; 2]) -> bool {
    let within = |v: T, k: usize| {
        let (mut lo, mut hi) = (a[k], a[k]);
        for q in [b[k], c[k]] {
            if q < lo {
                lo = q;
            }
            if q > hi {
                hi = q;
            }
        }
        v >= lo && v <= hi
    };
    within(px, 0) && within(py, 1)
}

/// Twice the signed area of a closed ring of points; positive for counter-clockwise rings.
///
/// Summed as a fan around the first point, so only coordinate differences are multiplied.
pub fn signed_area<T: Scalar>(points: &[[T; 2]]) -> T {
    let Some((&o, rest)) = points.split_first() else {
        return T::zero();
    };
    rest.windows(2)
        .fold(T::zero(), |sum, w| sum + signed_turn(o, w[0], w[1]))
}

/// Like [`signed_area`], but `None` if the sum or any of its terms overflows `T`.
pub fn checked_signed_area<T: Scalar>(points: &[[T; 2]]) -> Option<T> {
    let Some((&o, rest)) = points.split_first() else {
        return Some(T::zero());
    };
    rest.windows(2)
        .try_fold(T::zero(), |sum, w| sum.checked_add(checked_turn(o, w[0], w[1])?))
}

/// Check that every cross product between points of the ring fits `T`.
///
/// With `d` the larger side of the bounding box, a coordinate difference is at most `d` and a
/// [`signed_turn`] at most `2 * d * d` in magnitude.
pub fn cross_products_fit<T: Scalar>(points: &[[T; 2]]) -> bool {
    let Some((&[x0, y0], rest)) = points.split_first() else {
        return true;
    };
    let [(mut min_x, mut max_x), (mut min_y, mut max_y)] = [(x0, x0), (y0, y0)];
    for &[x, y] in rest {
        if x < min_x {
            min_x = x;
        }
        if x > max_x {
            max_x = x;
        }
        if y < min_y {
            min_y = y;
        }
        if y > max_y {
            max_y = y;
        }
    }
    let extent = || -> Option<T> {
        let w = max_x.checked_sub(min_x)?;
        let h = max_y.checked_sub(min_y)?;
        let d = if w > h { w } else { h };
        let dd = d.checked_mul(d)?;
        dd.checked_add(dd)
    };
    extent().is_some()
}

/// Whether the interior angle at `cur` exceeds a straight angle, for a ring of the given
/// winding.
///
/// A vertex is reflex when it turns against the ring's winding. Collinear vertices are never
/// reflex.
#[inline]
pub fn is_reflex<T: Scalar>(prev: [T; 2], cur: [T; 2], next: [T; 2], winding: Winding) -> bool {
    let turn = signed_turn(prev, cur, next);
    match winding {
        Winding::CounterClockwise => turn < T::zero(),
        Winding::Clockwise => turn > T::zero(),
    }
}
