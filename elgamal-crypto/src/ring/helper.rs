/// Computes the greatest common divisor of two numbers.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a.abs()
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
///
/// Iterative form of the extended Euclidean algorithm: `(a, b)` walk down the
/// remainder sequence while `(x, u)` and `(y, v)` carry the Bézout coefficients.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut x, mut u) = (1i64, 0i64);
    let (mut y, mut v) = (0i64, 1i64);

    while r != 0 {
        let t = old_r / r;
        (old_r, r) = (r, old_r - t * r);
        (x, u) = (u, x - t * u);
        (y, v) = (v, y - t * v);
    }

    if old_r < 0 {
        return (-old_r, -x, -y);
    }

    (old_r, x, y)
}
