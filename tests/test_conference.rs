mod common;

use common::{EAST, WEST};
use nba_outlook::models::Conference;

#[test]
fn test_east_codes_map_to_east() {
    for team in EAST {
        assert_eq!(Conference::of(team), Conference::East, "{team}");
    }
}

#[test]
fn test_everything_else_is_west() {
    for team in WEST {
        assert_eq!(Conference::of(team), Conference::West, "{team}");
    }

    // Defunct or unknown codes fall through to West
    assert_eq!(Conference::of("NJN"), Conference::West);
    assert_eq!(Conference::of("SEA"), Conference::West);
    assert_eq!(Conference::of(""), Conference::West);
    assert_eq!(Conference::of("bos"), Conference::West);
}
