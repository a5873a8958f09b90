use fleetgrid::{build_cone, build_cross, build_diamond, Mask, MaskShape, ABILITY_SIZE};

fn row_cols(mask: &Mask, row: usize) -> Vec<usize> {
    (0..ABILITY_SIZE)
        .filter(|&c| mask.get(row, c).unwrap())
        .collect()
}

#[test]
fn test_cone_widens_from_apex() {
    let cone = build_cone().unwrap();
    assert_eq!(row_cols(&cone, 0), vec![2]);
    assert_eq!(row_cols(&cone, 1), vec![1, 2, 3]);
    assert_eq!(row_cols(&cone, 2), vec![0, 1, 2, 3, 4]);
    assert_eq!(row_cols(&cone, 4), vec![0, 1, 2, 3, 4]);
    assert_eq!(cone.count_ones(), 1 + 3 + 5 + 5 + 5);
}

#[test]
fn test_cross_has_nine_cells() {
    let cross = build_cross().unwrap();
    assert_eq!(cross.count_ones(), 9);
    assert_eq!(row_cols(&cross, 2), vec![0, 1, 2, 3, 4]);
    for r in [0, 1, 3, 4] {
        assert_eq!(row_cols(&cross, r), vec![2]);
    }
}

#[test]
fn test_diamond_is_manhattan_ball() {
    let diamond = build_diamond().unwrap();
    assert_eq!(diamond.count_ones(), 13);
    assert!(diamond.get(2, 2).unwrap());
    assert!(diamond.get(0, 2).unwrap());
    assert!(diamond.get(1, 1).unwrap());
    assert!(!diamond.get(0, 1).unwrap());
    assert!(!diamond.get(4, 4).unwrap());
}

#[test]
fn test_shapes_build_their_masks() {
    assert_eq!(MaskShape::Cone.build().unwrap(), build_cone().unwrap());
    assert_eq!(MaskShape::Cross.build().unwrap(), build_cross().unwrap());
    assert_eq!(MaskShape::Diamond.build().unwrap(), build_diamond().unwrap());
    assert_eq!(MaskShape::Diamond.name(), "diamond");
}

#[test]
fn test_masks_match_their_cell_lists() {
    let cells = [(0, 2), (1, 2), (2, 0), (2, 1), (2, 2), (2, 3), (2, 4), (3, 2), (4, 2)];
    assert_eq!(build_cross().unwrap(), Mask::from_iter(cells).unwrap());
    for shape in [MaskShape::Cone, MaskShape::Cross, MaskShape::Diamond] {
        let mask = shape.build().unwrap();
        assert_eq!(Mask::from_iter(mask.iter_set_bits()).unwrap(), mask);
    }
}
