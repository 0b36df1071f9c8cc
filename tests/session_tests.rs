//! Session flow tests.
//!
//! These drive the sheet the way the screens do: home, setup, marking cells
//! with the toolbar, checking the deduction panel, and leaving the game.

use detective_sheet::catalog::{Category, ItemId};
use detective_sheet::core::{PlayerId, SheetConfig};
use detective_sheet::session::{Screen, Session};
use detective_sheet::{Mark, SheetError};

fn start(players: usize) -> Session {
    let mut session = Session::new();
    session.start_new_game().expect("home -> setup");
    session.select_player_count(players).expect("valid count");
    session.submit_setup().expect("setup -> game");
    session
}

/// Every supported table size produces a matching roster and grid.
#[test]
fn test_every_table_size() {
    for players in 3..=6 {
        let session = start(players);
        let game = session.game().unwrap();

        assert_eq!(game.players().len(), players);
        assert_eq!(game.grid().player_count(), players);
        for item in game.catalog().iter() {
            for player in PlayerId::all(players) {
                assert_eq!(game.mark(item.id, player), Mark::Empty);
            }
        }
    }
}

/// Unsupported table sizes are refused on the setup screen.
#[test]
fn test_setup_refuses_bad_sizes() {
    let mut session = Session::new();
    session.start_new_game().unwrap();

    for bad in [0, 1, 2, 7, 10] {
        assert!(matches!(
            session.select_player_count(bad),
            Err(SheetError::InvalidPlayerCount { .. })
        ));
    }
    assert_eq!(session.screen(), Screen::Setup);
}

/// The toolbar drives marks: confirm, overwrite with a different tool,
/// click again to clear.
#[test]
fn test_toolbar_marking() {
    let mut session = start(3);
    let plum = ItemId::suspect(4);
    let p1 = PlayerId::new(1);

    session.select_tool(Mark::Maybe).unwrap();
    session.click_cell(plum, p1).unwrap();
    session.select_tool(Mark::Yes).unwrap();
    let change = session.click_cell(plum, p1).unwrap();

    assert_eq!(change.previous, Mark::Maybe);
    assert_eq!(change.next, Mark::Yes);
    assert_eq!(change.cascaded.as_slice(), &[PlayerId::new(0), PlayerId::new(2)]);

    let panel = session.deduction().unwrap();
    assert_eq!(panel.suspects.len(), 5);
    assert!(!panel.suspects.names.iter().any(|n| n == "Prof. Plum"));

    session.click_cell(plum, p1).unwrap();
    assert_eq!(session.deduction().unwrap().suspects.len(), 6);
}

/// The panel is recomputed after every click, never stale.
#[test]
fn test_panel_tracks_every_click() {
    let mut session = start(4);
    session.select_tool(Mark::Revealed).unwrap();

    let weapons: Vec<ItemId> = (1..=6).map(ItemId::weapon).collect();
    for (i, weapon) in weapons.iter().enumerate().take(5) {
        session
            .click_cell(*weapon, PlayerId::new((i % 4) as u8))
            .unwrap();
        assert_eq!(session.deduction().unwrap().weapons.len(), 5 - i);
    }

    let game = session.game().unwrap();
    assert!(game.is_solution_item(ItemId::weapon(6)));
    assert_eq!(game.deduction().get(Category::Weapon).panel_text(), "Chave Inglesa");
}

/// Leaving requires an explicit confirmation and throws the game away.
#[test]
fn test_exit_flow() {
    let mut session = start(3);
    session.select_tool(Mark::Yes).unwrap();
    session.click_cell(ItemId::location(1), PlayerId::new(0)).unwrap();

    assert!(session.confirm_exit().is_err());
    session.request_exit().unwrap();
    assert!(session.is_exit_pending());
    session.cancel_exit().unwrap();
    assert!(session.game().is_some());

    session.request_exit().unwrap();
    session.confirm_exit().unwrap();
    assert_eq!(session.screen(), Screen::Home);
    assert!(session.game().is_none());

    // Home only offers a new game.
    assert!(session.request_exit().is_err());
    assert!(session.click_cell(ItemId::location(1), PlayerId::new(0)).is_err());
}

/// A custom setup names and colors the seats.
#[test]
fn test_custom_setup() {
    let config = SheetConfig::default()
        .with_user_name("Ana")
        .with_opponent_prefix("Rival");
    let mut session = Session::with_config(config);
    session.start_new_game().unwrap();
    session.select_player_count(4).unwrap();
    session.submit_setup().unwrap();

    let players = session.game().unwrap().players();
    assert_eq!(players[0].name, "Ana");
    assert_eq!(players[0].short_label(), "EU");
    assert_eq!(players[3].name, "Rival 4");
    assert_eq!(players[3].short_label(), "4");
}
