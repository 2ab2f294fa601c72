use super::player::Player;

/// Returns the number of fish required to advance from the given level.
///
/// Fish requirements by tier:
/// - Levels 1-4: 5 fish per level
/// - Levels 5-9: 10 fish per level
/// - Levels 10-19: 20 fish per level
/// - Levels 20+: 40 fish per level
pub fn fish_required_for_level(level: u32) -> u64 {
    match level {
        0..=4 => 5,
        5..=9 => 10,
        10..=19 => 20,
        _ => 40,
    }
}

/// Levels the player up as many times as their catch count allows.
///
/// Excess fish carry over to the next level. Returns the level before
/// the check, or None if no level was gained.
pub fn check_level_up(player: &mut Player) -> Option<u32> {
    let old_level = player.level;

    loop {
        let required = fish_required_for_level(player.level);
        if player.fish_toward_next_level < required {
            break;
        }
        player.fish_toward_next_level -= required;
        player.level += 1;
    }

    (player.level > old_level).then_some(old_level)
}
