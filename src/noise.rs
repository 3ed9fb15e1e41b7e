//! Classic value-noise ("Perlin") over a 4096-entry random lattice.
//!
//! The 1-D table is addressed as if it were 3-D: y and z offsets are shifted
//! into the index and everything is masked to the table size, so the lattice
//! wraps toroidally.

use crate::rng::Rng32;
use std::f64::consts::PI;

const PERLIN_YWRAPB: i32 = 4;
const PERLIN_YWRAP: i32 = 1 << PERLIN_YWRAPB;
const PERLIN_ZWRAPB: i32 = 8;
const PERLIN_ZWRAP: i32 = 1 << PERLIN_ZWRAPB;
const PERLIN_SIZE: i32 = 4095;

pub const TABLE_LEN: usize = PERLIN_SIZE as usize + 1;
pub const OCTAVES: u32 = 4;
pub const AMP_FALLOFF: f64 = 0.5;

#[inline]
fn scaled_cosine(i: f64) -> f64 {
    0.5 * (1.0 - (i * PI).cos())
}

pub struct Perlin {
    table: Box<[f64; TABLE_LEN]>,
}

impl Perlin {
    /// Fill the lattice from `rng`. Values are in [0,1) and never change.
    /// Stored as f64 so sampling far from the origin keeps full precision.
    pub fn new(rng: &mut Rng32) -> Self {
        let mut table = Box::new([0.0f64; TABLE_LEN]);
        for v in table.iter_mut() {
            *v = rng.next_f32() as f64;
        }
        Self { table }
    }

    pub fn table(&self) -> &[f64] {
        &self.table[..]
    }

    #[inline]
    fn at(&self, of: i32) -> f64 {
        self.table[(of & PERLIN_SIZE) as usize]
    }

    pub fn noise1(&self, x: f64) -> f64 {
        self.noise(x, 0.0, 0.0)
    }

    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        self.noise(x, y, 0.0)
    }

    /// Sample the noise field. Negative coordinates are mirrored.
    /// Four octaves with amplitudes 1/2, 1/4, 1/8, 1/16, so the result lies
    /// in [0, 1).
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        let (x, y, z) = (x.abs(), y.abs(), z.abs());

        let mut xi = x.floor() as i32;
        let mut yi = y.floor() as i32;
        let mut zi = z.floor() as i32;
        let mut xf = x - xi as f64;
        let mut yf = y - yi as f64;
        let mut zf = z - zi as f64;

        let mut r = 0.0;
        let mut ampl = 0.5;

        for _ in 0..OCTAVES {
            let mut of = xi
                .wrapping_add(yi.wrapping_shl(PERLIN_YWRAPB as u32))
                .wrapping_add(zi.wrapping_shl(PERLIN_ZWRAPB as u32));

            let rxf = scaled_cosine(xf);
            let ryf = scaled_cosine(yf);

            let mut n1 = self.at(of);
            n1 += rxf * (self.at(of.wrapping_add(1)) - n1);
            let mut n2 = self.at(of.wrapping_add(PERLIN_YWRAP));
            n2 += rxf * (self.at(of.wrapping_add(PERLIN_YWRAP + 1)) - n2);
            n1 += ryf * (n2 - n1);

            of = of.wrapping_add(PERLIN_ZWRAP);
            n2 = self.at(of);
            n2 += rxf * (self.at(of.wrapping_add(1)) - n2);
            let mut n3 = self.at(of.wrapping_add(PERLIN_YWRAP));
            n3 += rxf * (self.at(of.wrapping_add(PERLIN_YWRAP + 1)) - n3);
            n2 += ryf * (n3 - n2);

            n1 += scaled_cosine(zf) * (n2 - n1);

            r += n1 * ampl;
            ampl *= AMP_FALLOFF;

            xi = xi.wrapping_shl(1);
            xf *= 2.0;
            yi = yi.wrapping_shl(1);
            yf *= 2.0;
            zi = zi.wrapping_shl(1);
            zf *= 2.0;

            if xf >= 1.0 {
                xi = xi.wrapping_add(1);
                xf -= 1.0;
            }
            if yf >= 1.0 {
                yi = yi.wrapping_add(1);
                yf -= 1.0;
            }
            if zf >= 1.0 {
                zi = zi.wrapping_add(1);
                zf -= 1.0;
            }
        }
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perlin(seed: u32) -> Perlin {
        Perlin::new(&mut Rng32::from_seed(seed))
    }

    #[test]
    fn table_is_full_and_in_unit_range() {
        let p = perlin(3);
        assert_eq!(p.table().len(), 4096);
        assert!(p.table().iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn same_inputs_same_output() {
        let p = perlin(11);
        let q = perlin(11);
        for i in 0..200 {
            let x = i as f64 * 0.37;
            assert_eq!(p.noise(x, 2.5, 0.0), p.noise(x, 2.5, 0.0));
            assert_eq!(p.noise(x, 2.5, 0.0), q.noise(x, 2.5, 0.0));
        }
    }

    #[test]
    fn output_is_bounded() {
        let p = perlin(5);
        for i in 0..5_000 {
            let t = i as f64 * 0.013;
            for v in [p.noise1(t), p.noise2(t, t * 0.5), p.noise(t, 1000.0 + t, 3.3)] {
                assert!((0.0..1.0).contains(&v), "noise({t}) = {v}");
            }
        }
    }

    #[test]
    fn lattice_points_reduce_to_table_values() {
        // At integer x with y = z = 0 the first octave is the table entry;
        // later octaves land on lattice points too.
        let p = perlin(8);
        let t = p.table();
        let expected = 0.5 * t[3] + 0.25 * t[6] + 0.125 * t[12] + 0.0625 * t[24];
        assert!((p.noise1(3.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn negative_inputs_mirror() {
        let p = perlin(21);
        assert_eq!(p.noise(-1.25, -4.5, 0.0), p.noise(1.25, 4.5, 0.0));
    }

    #[test]
    fn nearby_inputs_give_nearby_outputs() {
        let p = perlin(2);
        let a = p.noise1(10.0);
        let b = p.noise1(10.001);
        assert!((a - b).abs() < 0.01);
    }

    #[test]
    fn small_steps_register_far_from_the_origin() {
        // Cursors run up to 1e6 before resetting; a 0.005 step must still
        // move the sample there.
        let p = perlin(13);
        let a = p.noise1(500_000.0);
        let b = p.noise1(500_000.005);
        assert_ne!(a, b);
        assert!((a - b).abs() < 0.01);
    }
}
