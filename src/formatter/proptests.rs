//! Property tests for the line formatter: any input yields exactly one block
//! per `\n`-delimited line, in order, without panicking.

use super::{ format, DisplayBlock };
use proptest::prelude::*;

/// Lines built from the pieces the rules look at: markers, pictographs,
/// carriage returns and ordinary text.
fn arb_answer() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("**".to_string()),
            Just("*".to_string()),
            Just("\n".to_string()),
            Just("\r".to_string()),
            Just("🚀".to_string()),
            Just("✍️".to_string()),
            Just("⭐".to_string()),
            "[a-zA-Z0-9 :.,!?]{1,12}",
        ],
        0..30
    ).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn prop_one_block_per_line(answer in arb_answer()) {
        let blocks = format(&answer);
        prop_assert_eq!(blocks.len(), answer.split('\n').count());
    }

    #[test]
    fn prop_arbitrary_strings_never_panic(answer in any::<String>()) {
        let blocks = format(&answer);
        prop_assert_eq!(blocks.len(), answer.split('\n').count());
    }

    #[test]
    fn prop_blocks_follow_line_order(answer in arb_answer()) {
        for (block, line) in format(&answer).iter().zip(answer.split('\n')) {
            prop_assert_eq!(block, &format(line)[0]);
            prop_assert_eq!(line.is_empty(), *block == DisplayBlock::Spacer);
        }
    }

    #[test]
    fn prop_deterministic(answer in any::<String>()) {
        prop_assert_eq!(format(&answer), format(&answer));
    }
}
