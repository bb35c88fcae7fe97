use super::*;

#[test]
fn corner_offsets_are_distinct_unit_corners() {
  for (i, a) in CORNER_OFFSETS.iter().enumerate() {
    assert!(a.iter().all(|&c| c <= 1), "corner {} out of unit cube", i);
    for (j, b) in CORNER_OFFSETS.iter().enumerate() {
      if i != j {
        assert_ne!(a, b, "corners {} and {} collide", i, j);
      }
    }
  }
}

#[test]
fn corner_offsets_match_mask_bit_order() {
  // The low nibble covers the z=0 face, the high nibble the z=1 face,
  // with matching (x, y) layout.
  for bit in 0..4 {
    let near = CORNER_OFFSETS[bit];
    let far = CORNER_OFFSETS[bit + 4];
    assert_eq!(near[0], far[0]);
    assert_eq!(near[1], far[1]);
    assert_eq!(near[2], 0);
    assert_eq!(far[2], 1);
  }
}

#[test]
fn padded_size_adds_one_sample_per_side() {
  assert_eq!(padded_size(1), 3);
  assert_eq!(padded_size(DEFAULT_CHUNK_SIZE), 22);
  assert_eq!(padded_size(MAX_CHUNK_SIZE), 34);
}

#[test]
fn uv_cycle_shares_the_diagonal_edge() {
  // Even triangle ends on (1,0)/(0,0); the odd triangle reuses (0,1) and
  // (1,0) so a quad's two triangles agree along the split.
  assert_eq!(UV_EVEN[0], UV_ODD[0]);
  assert_eq!(UV_EVEN[1], UV_ODD[2]);
}

#[test]
fn movement_threshold_is_squared_consistently() {
  assert_eq!(SQR_VIEWER_MOVE_THRESHOLD, VIEWER_MOVE_THRESHOLD * VIEWER_MOVE_THRESHOLD);
}
