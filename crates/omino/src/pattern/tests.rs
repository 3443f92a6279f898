use proptest::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::seq::SliceRandom;
use ::rand::SeedableRng;

use super::*;

fn shape(pts: &[(i32, i32)]) -> Shape {
    Shape::from_points(pts.iter().map(|&(x, y)| Point::new(x, y)).collect()).expect("distinct")
}

fn point_set(s: &Shape) -> Vec<(i32, i32)> {
    s.sorted_points().iter().map(|p| (p.x, p.y)).collect()
}

const ROTATIONS_ONLY: SymmetryCfg = SymmetryCfg {
    rotations: true,
    mirrors: false,
};
const MIRRORS_ONLY: SymmetryCfg = SymmetryCfg {
    rotations: false,
    mirrors: true,
};
const NO_SYMMETRY: SymmetryCfg = SymmetryCfg {
    rotations: false,
    mirrors: false,
};

#[test]
fn frontier_of_origin_is_the_4_neighborhood() {
    let f = growth_frontier(&Shape::origin());
    assert_eq!(
        f,
        vec![
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(0, 1),
            Point::new(1, 0),
        ]
    );
}

#[test]
fn frontier_reaches_every_shape_point() {
    // The L's inner corner (1, 1) is 4-connected to two shape points and
    // diagonal to a third; it must appear exactly once.
    let l = shape(&[(0, 0), (0, 1), (1, 0)]);
    let f = growth_frontier(&l);
    assert!(f.contains(&Point::new(1, 1)));
    assert_eq!(f.iter().filter(|&&p| p == Point::new(1, 1)).count(), 1);
    // Frontier points are outside the shape and 4-connected to it.
    for &p in &f {
        assert!(!l.contains(p));
        assert!(Dir::ALL.iter().any(|&d| l.contains(p.step(d))));
    }
    assert_eq!(f.len(), 7);
}

#[test]
fn frontier_excludes_diagonal_only_contact() {
    let domino = shape(&[(0, 0), (1, 0)]);
    let f = growth_frontier(&domino);
    assert_eq!(f.len(), 6);
    assert!(!f.contains(&Point::new(-1, 1)));
    assert!(!f.contains(&Point::new(2, -1)));
}

#[test]
fn generate_base_cases() {
    assert!(generate(0).unwrap().is_empty());
    let one = generate(1).unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(point_set(&one[0]), vec![(0, 0)]);
    let two = generate(2).unwrap();
    assert_eq!(two.len(), 1);
    assert_eq!(point_set(&two[0]), vec![(0, 0), (1, 0)]);
}

#[test]
fn negative_count_is_rejected() {
    assert_eq!(
        generate(-1).unwrap_err(),
        GenerateError::NegativeCount { given: -1 }
    );
    assert_eq!(
        generate_with(-7, NO_SYMMETRY).unwrap_err(),
        GenerateError::NegativeCount { given: -7 }
    );
}

#[test]
fn free_polyomino_counts() {
    // A000105: free polyominoes under translation + rotation + mirror.
    let expected = [1, 1, 2, 5, 12, 35, 108, 369];
    for (i, &want) in expected.iter().enumerate() {
        let n = i as i64 + 1;
        assert_eq!(generate(n).unwrap().len(), want, "free count for n={n}");
    }
}

#[test]
fn one_sided_polyomino_counts() {
    // A000988: rotations only; chiral pairs stay distinct.
    let expected = [1, 1, 2, 7, 18, 60];
    for (i, &want) in expected.iter().enumerate() {
        let n = i as i64 + 1;
        assert_eq!(
            generate_with(n, ROTATIONS_ONLY).unwrap().len(),
            want,
            "one-sided count for n={n}"
        );
    }
}

#[test]
fn fixed_polyomino_counts() {
    // A001168: translation only.
    let expected = [1, 2, 6, 19, 63, 216];
    for (i, &want) in expected.iter().enumerate() {
        let n = i as i64 + 1;
        assert_eq!(
            generate_with(n, NO_SYMMETRY).unwrap().len(),
            want,
            "fixed count for n={n}"
        );
    }
}

#[test]
fn mirror_only_counts() {
    // Hand-checked: both dominoes are mirror-symmetric; the four fixed L
    // trominoes pair up, the two straight ones map to themselves.
    assert_eq!(generate_with(2, MIRRORS_ONLY).unwrap().len(), 2);
    assert_eq!(generate_with(3, MIRRORS_ONLY).unwrap().len(), 4);
}

#[test]
fn tetrominoes_are_the_classic_five() {
    let four = generate(4).unwrap();
    assert_eq!(four.len(), 5);
    let mut sets: Vec<_> = four.iter().map(point_set).collect();
    sets.sort();
    // Every shape sits in its bounding box with 4 distinct cells.
    for s in &sets {
        assert_eq!(s.len(), 4);
    }
    // The square tetromino must be among them, in canonical position.
    assert!(sets.contains(&vec![(0, 0), (0, 1), (1, 0), (1, 1)]));
}

#[test]
fn symmetry_closure_in_results() {
    let cfg = SymmetryCfg::default();
    let shapes = generate(4).unwrap();
    let keys: Vec<_> = shapes
        .iter()
        .map(|s| canonical_key(s, cfg).unwrap())
        .collect();
    for i in 0..keys.len() {
        for j in i + 1..keys.len() {
            assert_ne!(keys[i], keys[j], "duplicate class in result set");
        }
    }
    // No rotation or mirror image of a kept shape forms a new class.
    for (s, key) in shapes.iter().zip(&keys) {
        for r in s.rotations().unwrap() {
            assert_eq!(&canonical_key(&r, cfg).unwrap(), key);
        }
        let m = s.mirrored().unwrap();
        assert_eq!(&canonical_key(&m, cfg).unwrap(), key);
    }
}

#[test]
fn dedup_collapses_a_full_orbit_and_is_idempotent() {
    let cfg = SymmetryCfg::default();
    let l = shape(&[(0, 0), (0, 1), (1, 0)]);
    let mut orbit = vec![l.clone()];
    orbit.extend(l.rotations().unwrap());
    let mirrored: Vec<_> = orbit.iter().map(|s| s.mirrored().unwrap()).collect();
    orbit.extend(mirrored);
    let once = dedup_shapes(orbit, cfg).unwrap();
    assert_eq!(once.len(), 1);
    assert_eq!(point_set(&once[0]), point_set(&l));
    let twice = dedup_shapes(once.clone(), cfg).unwrap();
    assert_eq!(twice.len(), once.len());
    assert_eq!(point_set(&twice[0]), point_set(&once[0]));
}

#[test]
fn dedup_respects_the_configured_group() {
    let l = shape(&[(0, 0), (0, 1), (1, 0)]);
    let [r90, _, _] = l.rotations().unwrap();
    let pair = vec![l.clone(), r90];
    assert_eq!(dedup_shapes(pair.clone(), ROTATIONS_ONLY).unwrap().len(), 1);
    assert_eq!(dedup_shapes(pair, NO_SYMMETRY).unwrap().len(), 2);
}

#[test]
fn generate_is_deterministic() {
    let a = generate(5).unwrap();
    let b = generate(5).unwrap();
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.points(), y.points());
    }
}

proptest! {
    #[test]
    fn generated_shapes_are_valid(n in 1..=6i64) {
        for s in generate(n).unwrap() {
            prop_assert_eq!(s.len() as i64, n);
            prop_assert!(s.is_connected());
            prop_assert!(s.points().iter().all(|p| p.is_nonnegative()));
            prop_assert!(s.points().iter().any(|p| p.x == 0));
            prop_assert!(s.points().iter().any(|p| p.y == 0));
            // Distinctness of the point sequence.
            prop_assert_eq!(s.sorted_points().len(), s.len());
        }
    }

    #[test]
    fn canonical_key_ignores_insertion_order(seed in any::<u64>()) {
        let cfg = SymmetryCfg::default();
        let shapes = generate(5).unwrap();
        let pick = &shapes[(seed % shapes.len() as u64) as usize];
        let mut pts = pick.points().to_vec();
        pts.shuffle(&mut StdRng::seed_from_u64(seed));
        let shuffled = Shape::from_points(pts).expect("distinct");
        prop_assert_eq!(
            canonical_key(&shuffled, cfg).unwrap(),
            canonical_key(pick, cfg).unwrap()
        );
    }
}
