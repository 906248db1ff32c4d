#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized filename pattern tests
// ============================================================================

#[test_case("lock.lua", true; "plain script")]
#[test_case("test_queue.lua", true; "underscored script")]
#[test_case("lock.v2.lua", true; "dotted stem")]
#[test_case("lock.LUA", false; "uppercase extension")]
#[test_case("lock.lua.bak", false; "backup suffix")]
#[test_case("lock.txt", false; "other extension")]
#[test_case("lua", false; "extension as name")]
#[test_case("lock", false; "no extension")]
#[test_case(".lua", false; "hidden file without stem")]
fn is_script___matches_lua_pattern(name: &str, expected: bool) {
    let path = Path::new("/src").join(name);

    assert_eq!(is_script(&path), expected);
}
