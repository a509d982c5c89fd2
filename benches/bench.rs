#![allow(clippy::all)] // Clippy will attempt to remove black_box() internals

use criterion::*;
use gridgen::*;
use lutn::{Table, Table3D};

macro_rules! bench_lookup_specific {
    ($group:ident, $ndims:expr, $gridsize:expr, $size:expr) => {
        $group.throughput(Throughput::Elements(*$size as u64));
        let scan_or_shuffle = "Shuffled Order";

        $group.bench_with_input(
            BenchmarkId::new(
                format!(
                    "Multilinear {}x{}D, {}",
                    $gridsize, $ndims, scan_or_shuffle
                ),
                $size,
            ),
            $size,
            |b, &size| {
                // Lookup table with irregular spacing
                let (grids, z) = gen_grid($ndims, $gridsize, 1.0);
                let table = Table::from_parts(grids.clone(), z);

                // Observation grid
                let m: usize = ((size as f64).powf(1.0 / ($ndims as f64)) + 2.0) as usize;
                let gridobs_t = gen_interp_obs_grid(&grids, m, true);
                let obs: Vec<&[f64]> = gridobs_t.iter().map(|x| &x[..size]).collect();
                let mut out = vec![0.0; size];

                b.iter(|| black_box(table.interp(&obs, &mut out).unwrap()));
            },
        );

        $group.bench_with_input(
            BenchmarkId::new(
                format!(
                    "Multilinear {}x{}D Populate + Lookup, {}",
                    $gridsize, $ndims, scan_or_shuffle
                ),
                $size,
            ),
            $size,
            |b, &size| {
                let (grids, z) = gen_grid($ndims, $gridsize, 1.0);

                let m: usize = ((size as f64).powf(1.0 / ($ndims as f64)) + 2.0) as usize;
                let gridobs_t = gen_interp_obs_grid(&grids, m, true);
                let obs: Vec<&[f64]> = gridobs_t.iter().map(|x| &x[..size]).collect();
                let mut out = vec![0.0; size];

                b.iter(|| {
                    black_box({
                        let table = Table::from_parts(grids.clone(), z.clone());
                        table.interp(&obs, &mut out).unwrap()
                    })
                });
            },
        );
    };
}

fn bench_lookup(c: &mut Criterion) {
    for ndims in 2..=6 {
        let gridsize = 10;
        let mut group = c.benchmark_group(format!("Lookup_{ndims}D_Shuffled_{gridsize}-grid"));
        for size in [1, 100, 10_000].iter() {
            match ndims {
                2 => {
                    bench_lookup_specific!(group, 2, gridsize, size);
                }
                3 => {
                    bench_lookup_specific!(group, 3, gridsize, size);
                }
                4 => {
                    bench_lookup_specific!(group, 4, gridsize, size);
                }
                5 => {
                    bench_lookup_specific!(group, 5, gridsize, size);
                }
                _ => {
                    bench_lookup_specific!(group, 6, gridsize, size);
                }
            }
        }
        group.finish();
    }

    // Fixed-dimension wrapper, one point at a time
    let gridsize = 10;
    let mut group = c.benchmark_group(format!("Lookup_3D_Fixed_{gridsize}-grid"));
    let (grids, z) = gen_grid(3, gridsize, 1.0);
    let table = Table3D::from_parts([grids[0].clone(), grids[1].clone(), grids[2].clone()], z);
    let gridobs_t = gen_interp_obs_grid(&grids, 10, true);
    group.throughput(Throughput::Elements(gridobs_t[0].len() as u64));
    group.bench_function("lookup_by_values", |b| {
        b.iter(|| {
            for i in 0..gridobs_t[0].len() {
                let x = [gridobs_t[0][i], gridobs_t[1][i], gridobs_t[2][i]];
                black_box(table.lookup_by_values(x).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_rejection(c: &mut Criterion) {
    // Points outside the grid on every axis are refused after the bounds check
    for ndims in [2, 3] {
        let gridsize = 10;
        let mut group = c.benchmark_group(format!("Reject_{ndims}D_{gridsize}-grid"));
        let (grids, z) = gen_grid(ndims, gridsize, 0.0);
        let table = Table::from_parts(grids.clone(), z);
        let gridobs_t = gen_outside_obs_grid(&grids, 10);
        group.throughput(Throughput::Elements(gridobs_t[0].len() as u64));
        group.bench_function("lookup_by_values", |b| {
            let mut x = vec![0.0; ndims];
            b.iter(|| {
                for i in 0..gridobs_t[0].len() {
                    (0..ndims).for_each(|j| x[j] = gridobs_t[j][i]);
                    black_box(table.lookup_by_values(&x).unwrap_err());
                }
            })
        });
        group.finish();
    }
}

criterion_group!(benches_lookup, bench_lookup);
criterion_group!(benches_rejection, bench_rejection);
criterion_main!(benches_lookup, benches_rejection,);

mod randn {
    use rand::distr::{Distribution, StandardUniform};
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;

    /// Fixed random seed to support repeatable testing
    const SEED: [u8; 32] = [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7,
        6, 5, 4, 3, 2, 1,
    ];

    /// Get a random number generator with a const seed for repeatable testing
    pub fn rng_fixed_seed() -> StdRng {
        StdRng::from_seed(SEED)
    }

    /// Generate `n` random numbers using provided generator
    pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
    where
        StandardUniform: Distribution<T>,
    {
        let out: Vec<T> = (0..n).map(|_| rng.random::<T>()).collect();
        out
    }
}

mod gridgen {
    use super::randn::*;
    use lutn::utils::*;
    use rand::seq::SliceRandom;

    // Generate a (potentially irregular) grid of breakpoints,
    // and some fake data values.
    pub fn gen_grid(ndims: usize, size: usize, noise: f64) -> (Vec<Vec<f64>>, Vec<f64>) {
        let mut rng = rng_fixed_seed();
        let n = size.pow(ndims as u32);
        let z = randn::<f64>(&mut rng, n);

        // Noise is kept below half the spacing so the axes stay increasing
        let dx = 100.0 / (size - 1) as f64;
        let noise = noise.min(0.4 * dx);
        let grids: Vec<Vec<f64>> = (0..ndims)
            .map(|_| {
                let mut x = linspace(0.0, 100.0, size);
                if noise > 0.0 {
                    let dx = randn::<f64>(&mut rng, size);
                    (0..size).for_each(|i| x[i] = x[i] + (dx[i] - 0.5) * noise);
                }
                x
            })
            .collect();

        (grids, z)
    }

    // Generate a set of either sequential (scanning) or shuffled
    // observation points that are entirely inside the grid.
    //
    // `size` is the size per grid, so the total number of points will be size.pow(ndims).
    pub fn gen_interp_obs_grid(
        grids: &Vec<Vec<f64>>,
        size: usize,
        shuffled: bool,
    ) -> Vec<Vec<f64>> {
        let mut rng = rng_fixed_seed();
        let ndims = grids.len();

        let xobs: Vec<Vec<f64>> = (0..ndims)
            .map(|i| linspace(grids[i][1], grids[i][grids[i].len() - 2], size))
            .collect();
        let gridobs = meshgrid((0..ndims).map(|i| &xobs[i]).collect());
        let mut gridobs_t: Vec<Vec<f64>> = (0..ndims)
            .map(|i| gridobs.iter().map(|x| x[i]).collect())
            .collect(); // transpose
        if shuffled {
            (0..ndims).for_each(|i| gridobs_t[i].shuffle(&mut rng));
        }
        gridobs_t
    }

    // Generate a set of observation points that are entirely outside
    // the grid on every axis.
    pub fn gen_outside_obs_grid(grids: &Vec<Vec<f64>>, size: usize) -> Vec<Vec<f64>> {
        let ndims = grids.len();

        let xobs: Vec<Vec<f64>> = (0..ndims)
            .map(|i| {
                let hi = grids[i][grids[i].len() - 1];
                linspace(hi + 1.0, hi + 2.0, size)
            })
            .collect();
        let gridobs = meshgrid((0..ndims).map(|i| &xobs[i]).collect());
        (0..ndims)
            .map(|i| gridobs.iter().map(|x| x[i]).collect())
            .collect() // transpose
    }
}
