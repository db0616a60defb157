//! Integration tests for the ranking engine and leaderboard views.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use squad_stats::{
    leaderboard, rank, LeaderboardView, MetricKey, Player, PlayerId, SortDirection, SortState,
};

fn ids(players: &[&Player]) -> Vec<PlayerId> {
    players.iter().map(|p| p.id).collect()
}

fn rated(ratings: &[i64]) -> Vec<Player> {
    ratings
        .iter()
        .enumerate()
        .map(|(i, &r)| Player::new(format!("P{i}")).with_rating(r))
        .collect()
}

#[test]
fn empty_input_ranks_to_empty_output() {
    let players: Vec<Player> = Vec::new();
    for key in MetricKey::ALL {
        assert!(rank(&players, key, SortDirection::Descending).is_empty());
        assert!(rank(&players, key, SortDirection::Ascending).is_empty());
    }
}

#[test]
fn descending_is_reverse_of_ascending_without_ties() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut ratings: Vec<i64> = (0..40).map(|i| i * 37 - 300).collect();
    ratings.shuffle(&mut rng);
    let players = rated(&ratings);

    let asc = rank(&players, MetricKey::SkillRating, SortDirection::Ascending);
    let mut desc = rank(&players, MetricKey::SkillRating, SortDirection::Descending);
    desc.reverse();
    assert_eq!(ids(&asc), ids(&desc));
}

#[test]
fn ties_keep_input_order_in_both_directions() {
    let players = rated(&[500, 700, 500, 300, 700, 500]);
    let desc = rank(&players, MetricKey::SkillRating, SortDirection::Descending);
    let expected_desc = [1, 4, 0, 2, 5, 3].map(|i| players[i].id);
    assert_eq!(ids(&desc), expected_desc);

    let asc = rank(&players, MetricKey::SkillRating, SortDirection::Ascending);
    let expected_asc = [3, 0, 2, 5, 1, 4].map(|i| players[i].id);
    assert_eq!(ids(&asc), expected_asc);
}

#[test]
fn random_ties_are_stable() {
    let mut rng = StdRng::seed_from_u64(3);
    let players: Vec<Player> = (0..200)
        .map(|i| Player::new(format!("P{i}")).with_matches(rng.gen_range(0..5), 0))
        .collect();
    let position = |id: PlayerId| players.iter().position(|p| p.id == id).unwrap();

    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let ranked = rank(&players, MetricKey::TotalMatches, direction);
        for pair in ranked.windows(2) {
            if pair[0].total_matches == pair[1].total_matches {
                assert!(position(pair[0].id) < position(pair[1].id));
            }
        }
    }
}

#[test]
fn derived_metrics_rank_on_unrounded_values() {
    // 2/3 and 0.67 both display as "0.67"; the unrounded value decides.
    let players = vec![
        Player::new("a").with_frags(67, 100, 0),
        Player::new("b").with_frags(2, 3, 0),
    ];
    let ranked = rank(&players, MetricKey::Kd, SortDirection::Descending);
    assert_eq!(ranked[0].display_name(), "a");
}

#[test]
fn kd_without_deaths_ranks_as_kill_count() {
    let players = vec![
        Player::new("careful").with_frags(3, 0, 0),
        Player::new("busy").with_frags(40, 10, 0),
    ];
    let ranked = rank(&players, MetricKey::Kd, SortDirection::Descending);
    assert_eq!(ranked[0].display_name(), "busy");
    assert_eq!(ranked[1].display_name(), "careful");
    assert_eq!(MetricKey::Kd.numeric_value(ranked[1]), Some(3.0));
}

#[test]
fn names_rank_case_insensitively() {
    let players = vec![
        Player::new("charlie"),
        Player::new("Alpha"),
        Player::new("bravo"),
        Player::new("ALPHA"),
    ];
    let ranked = rank(&players, MetricKey::Name, SortDirection::Ascending);
    let names: Vec<_> = ranked.iter().map(|p| p.display_name()).collect();
    assert_eq!(names, vec!["Alpha", "ALPHA", "bravo", "charlie"]);
}

#[test]
fn sort_state_applies_current_column() {
    let players = rated(&[10, 30, 20]);
    let mut state = SortState::new(MetricKey::SkillRating);
    let ratings = |v: Vec<&Player>| v.iter().map(|p| p.skill_rating).collect::<Vec<_>>();
    assert_eq!(ratings(state.apply(&players)), vec![30, 20, 10]);
    state.toggle(MetricKey::SkillRating);
    assert_eq!(ratings(state.apply(&players)), vec![10, 20, 30]);
}

fn season() -> Vec<Player> {
    vec![
        Player::new("rookie").with_frags(9, 1, 0).with_matches(1, 1),
        Player::new("vet").with_frags(60, 60, 0).with_matches(20, 8),
        Player::new("lurker").with_frags(5, 10, 0).with_matches(3, 1),
        Player::new("spectator"),
        Player::new("grinder").with_frags(80, 40, 0).with_matches(12, 7),
    ]
}

#[test]
fn best_view_includes_everyone_and_truncates() {
    let players = season();
    let board = leaderboard(&players, &LeaderboardView::best(MetricKey::Kd, 3));
    let names: Vec<_> = board.iter().map(|e| e.player.display_name()).collect();
    assert_eq!(names, vec!["rookie", "grinder", "vet"]);
    assert_eq!(board.iter().map(|e| e.position).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(board[0].metrics.kd, 9.0);
}

#[test]
fn worst_view_skips_players_under_threshold() {
    let players = season();
    let board = leaderboard(&players, &LeaderboardView::worst(MetricKey::Kd, 5));
    let names: Vec<_> = board.iter().map(|e| e.player.display_name()).collect();
    // rookie (1 match) and spectator (0 matches) are below the 3-match minimum.
    assert_eq!(names, vec!["lurker", "vet", "grinder"]);
}

#[test]
fn table_view_requires_one_match() {
    let players = season();
    let board = leaderboard(&players, &LeaderboardView::table(MetricKey::Name));
    assert_eq!(board.len(), 4);
    assert!(board.iter().all(|e| e.player.total_matches >= 1));
    assert_eq!(board[0].player.display_name(), "grinder");
}

#[test]
fn min_matches_threshold_is_configurable() {
    let players = season();
    let view = LeaderboardView::worst(MetricKey::WinRatePct, 10).with_min_matches(12);
    let board = leaderboard(&players, &view);
    let names: Vec<_> = board.iter().map(|e| e.player.display_name()).collect();
    assert_eq!(names, vec!["vet", "grinder"]);
}

#[test]
fn views_deserialize_with_defaults() {
    let view: LeaderboardView = serde_json::from_str(r#"{ "metric": "headshotPct" }"#).unwrap();
    assert_eq!(view.metric, MetricKey::HeadshotPct);
    assert_eq!(view.direction, SortDirection::Descending);
    assert_eq!(view.min_matches, 1);
    assert_eq!(view.limit, None);

    let view: LeaderboardView = serde_json::from_str(
        r#"{ "metric": "total5ks", "direction": "ascending", "minMatches": 3, "limit": 5 }"#,
    )
    .unwrap();
    assert_eq!(view, LeaderboardView::worst(MetricKey::Total5ks, 5));
}

#[test]
fn accented_names_sort_next_to_their_base_letter() {
    let players = vec![Player::new("Zeca"), Player::new("Érico"), Player::new("Fabio")];
    let ranked = rank(&players, MetricKey::Name, SortDirection::Ascending);
    let names: Vec<_> = ranked.iter().map(|p| p.display_name()).collect();
    assert_eq!(names, vec!["Érico", "Fabio", "Zeca"]);
}

#[test]
fn large_integer_keys_compare_exactly() {
    let players = vec![
        Player::new("lo").with_rating(1 << 53),
        Player::new("hi").with_rating((1 << 53) + 1),
    ];
    let ranked = rank(&players, MetricKey::SkillRating, SortDirection::Descending);
    let names: Vec<_> = ranked.iter().map(|p| p.display_name()).collect();
    assert_eq!(names, vec!["hi", "lo"]);

    let counters = vec![
        Player::new("lo").with_frags(u64::MAX - 1, 0, 0),
        Player::new("hi").with_frags(u64::MAX, 0, 0),
    ];
    let ranked = rank(&counters, MetricKey::TotalKills, SortDirection::Descending);
    assert_eq!(ranked[0].display_name(), "hi");
}
