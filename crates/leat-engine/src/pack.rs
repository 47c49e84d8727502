//! Greedy bundling of raw panel totals into purchasable packs.

use leat_core::{PackedRequirements, RawRequirements};

/// Bundle raw panel totals into four-packs and two-packs.
///
/// Deterministic greedy priority:
///
/// 1. Four-packs first (2 side + 1 left + 1 right each), as many as the
///    scarcest component allows.
/// 2. Two-packs (2 side each) from the remaining sides.
/// 3. Whatever is left is loose.
///
/// Couplings and corner connectors pass through unbundled. The fold is
/// conservative: `packed.panel_total() == raw.total_panels()` for every
/// input.
pub fn pack(raw: RawRequirements) -> PackedRequirements {
    let four_packs = raw
        .left_panels
        .min(raw.right_panels)
        .min(raw.side_panels / 2);
    let side = raw.side_panels - four_packs * 2;
    let left = raw.left_panels - four_packs;
    let right = raw.right_panels - four_packs;

    let two_packs = side / 2;

    PackedRequirements {
        four_packs,
        two_packs,
        loose_side: side - two_packs * 2,
        loose_left: left,
        loose_right: right,
        straight_couplings: raw.straight_couplings,
        corner_connectors: raw.corner_connectors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn raw(side: u32, left: u32, right: u32) -> RawRequirements {
        RawRequirements {
            side_panels: side,
            left_panels: left,
            right_panels: right,
            ..RawRequirements::ZERO
        }
    }

    // ── Ground truths ───────────────────────────────────────────

    #[test]
    fn single_cube_totals_fill_one_four_pack() {
        let packed = pack(raw(2, 1, 1));
        assert_eq!(packed.four_packs, 1);
        assert_eq!(packed.two_packs, 0);
        assert_eq!(packed.loose_total(), 0);
    }

    #[test]
    fn straight_run_of_three() {
        let packed = pack(raw(6, 1, 1));
        assert_eq!(packed.four_packs, 1);
        assert_eq!(packed.two_packs, 2);
        assert_eq!(packed.loose_total(), 0);
    }

    #[test]
    fn two_separate_runs_fill_two_four_packs() {
        let packed = pack(raw(4, 2, 2));
        assert_eq!(packed.four_packs, 2);
        assert_eq!(packed.two_packs, 0);
        assert_eq!(packed.loose_total(), 0);
    }

    // ── Remainder handling ──────────────────────────────────────

    #[test]
    fn odd_sides_leave_one_loose() {
        let packed = pack(raw(5, 1, 1));
        assert_eq!(packed.four_packs, 1);
        assert_eq!(packed.two_packs, 1);
        assert_eq!(packed.loose_side, 1);
    }

    #[test]
    fn surplus_caps_stay_loose() {
        // Left caps outnumber rights; only one four-pack forms.
        let packed = pack(raw(4, 3, 1));
        assert_eq!(packed.four_packs, 1);
        assert_eq!(packed.two_packs, 1);
        assert_eq!(packed.loose_left, 2);
        assert_eq!(packed.loose_right, 0);
    }

    #[test]
    fn sides_limit_four_packs() {
        let packed = pack(raw(1, 3, 3));
        assert_eq!(packed.four_packs, 0);
        assert_eq!(packed.two_packs, 0);
        assert_eq!(packed.loose_side, 1);
        assert_eq!(packed.loose_left, 3);
        assert_eq!(packed.loose_right, 3);
    }

    #[test]
    fn connectors_pass_through() {
        let packed = pack(RawRequirements {
            straight_couplings: 4,
            corner_connectors: 2,
            ..RawRequirements::ZERO
        });
        assert_eq!(packed.straight_couplings, 4);
        assert_eq!(packed.corner_connectors, 2);
        assert_eq!(packed.panel_total(), 0);
    }

    #[test]
    fn zero_in_zero_out() {
        assert_eq!(pack(RawRequirements::ZERO), PackedRequirements::ZERO);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn packing_conserves_panels(
            side in 0u32..200,
            left in 0u32..50,
            right in 0u32..50,
            straight in 0u32..50,
            corner in 0u32..50,
        ) {
            let input = RawRequirements {
                side_panels: side,
                left_panels: left,
                right_panels: right,
                straight_couplings: straight,
                corner_connectors: corner,
            };
            let packed = pack(input);
            prop_assert_eq!(packed.panel_total(), input.total_panels());
            prop_assert_eq!(packed.straight_couplings, straight);
            prop_assert_eq!(packed.corner_connectors, corner);
        }

        #[test]
        fn loose_sides_never_reach_two(
            side in 0u32..200,
            left in 0u32..50,
            right in 0u32..50,
        ) {
            let packed = pack(raw(side, left, right));
            prop_assert!(packed.loose_side < 2);
        }

        #[test]
        fn four_packs_exhaust_a_cap_or_the_sides(
            side in 0u32..200,
            left in 0u32..50,
            right in 0u32..50,
        ) {
            let packed = pack(raw(side, left, right));
            prop_assert!(
                packed.loose_left == 0
                    || packed.loose_right == 0
                    || packed.loose_side + packed.two_packs * 2 < 2
            );
        }
    }
}
