use hero_defense_core::{
    CellCoord, Command, Event, HeroId, HeroKind, PlacementError, PurchaseError,
};
use hero_defense_world::{self as world, query, World};

fn apply_all(world: &mut World, commands: impl IntoIterator<Item = Command>) -> Vec<Event> {
    let mut events = Vec::new();
    for command in commands {
        world::apply(world, command, &mut events);
    }
    events
}

fn placed_ids(events: &[Event]) -> Vec<HeroId> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::HeroPlaced { hero, .. } => Some(*hero),
            _ => None,
        })
        .collect()
}

#[test]
fn purchase_refusal_and_sale_round_the_economy() {
    let mut world = World::new();
    assert_eq!(query::gold(&world), 1000);

    let events = apply_all(
        &mut world,
        [Command::PlaceHero {
            kind: HeroKind::Warrior,
            cell: CellCoord::new(0, 0),
        }],
    );
    let warrior = placed_ids(&events)[0];
    assert_eq!(query::gold(&world), 500);
    assert_eq!(query::hero_view(&world).len(), 1);

    let events = apply_all(
        &mut world,
        [Command::PlaceHero {
            kind: HeroKind::Mage,
            cell: CellCoord::new(1, 0),
        }],
    );
    assert_eq!(
        events,
        vec![Event::HeroPlacementRejected {
            kind: HeroKind::Mage,
            cell: CellCoord::new(1, 0),
            reason: PurchaseError::InsufficientGold {
                required: 700,
                available: 500,
            },
        }]
    );
    assert_eq!(query::gold(&world), 500);
    assert_eq!(query::hero_view(&world).len(), 1);

    let events = apply_all(&mut world, [Command::SellHero { hero: warrior }]);
    assert_eq!(
        events,
        vec![Event::HeroSold {
            hero: warrior,
            kind: HeroKind::Warrior,
            cell: CellCoord::new(0, 0),
            refund: 350,
        }]
    );
    assert_eq!(query::gold(&world), 850);
    assert!(query::hero_view(&world).is_empty());
}

#[test]
fn refused_placements_leave_state_untouched() {
    let mut world = World::new();
    let first = apply_all(
        &mut world,
        [Command::PlaceHero {
            kind: HeroKind::Archer,
            cell: CellCoord::new(3, 3),
        }],
    );
    assert_eq!(placed_ids(&first).len(), 1);

    let events = apply_all(
        &mut world,
        [
            Command::PlaceHero {
                kind: HeroKind::Archer,
                cell: CellCoord::new(0, 9),
            },
            Command::PlaceHero {
                kind: HeroKind::Archer,
                cell: CellCoord::new(3, 3),
            },
            Command::PlaceHero {
                kind: HeroKind::Archer,
                cell: CellCoord::new(0, 18),
            },
        ],
    );

    let reasons: Vec<PurchaseError> = events
        .iter()
        .filter_map(|event| match event {
            Event::HeroPlacementRejected { reason, .. } => Some(*reason),
            _ => None,
        })
        .collect();
    assert_eq!(
        reasons,
        vec![
            PurchaseError::Placement(PlacementError::OnPath),
            PurchaseError::Placement(PlacementError::Occupied),
            PurchaseError::Placement(PlacementError::OutOfBounds),
        ]
    );
    assert_eq!(query::gold(&world), 700);
    assert_eq!(query::hero_view(&world).len(), 1);
}

#[test]
fn heroes_keep_placement_order_after_sales() {
    let mut world = World::new();
    let events = apply_all(
        &mut world,
        [
            Command::PlaceHero {
                kind: HeroKind::Archer,
                cell: CellCoord::new(0, 0),
            },
            Command::PlaceHero {
                kind: HeroKind::Archer,
                cell: CellCoord::new(1, 0),
            },
            Command::PlaceHero {
                kind: HeroKind::Archer,
                cell: CellCoord::new(2, 0),
            },
        ],
    );
    let ids = placed_ids(&events);
    assert_eq!(ids.len(), 3);
    assert_eq!(query::gold(&world), 100);

    let _ = apply_all(&mut world, [Command::SellHero { hero: ids[1] }]);

    let cells: Vec<CellCoord> = query::hero_view(&world)
        .iter()
        .map(|hero| hero.cell)
        .collect();
    assert_eq!(cells, vec![CellCoord::new(0, 0), CellCoord::new(2, 0)]);
    assert_eq!(query::gold(&world), 310);
    assert_eq!(query::hero_at(&world, CellCoord::new(1, 0)), None);
}

#[test]
fn selling_unknown_hero_changes_nothing() {
    let mut world = World::new();
    let events = apply_all(
        &mut world,
        [Command::SellHero {
            hero: HeroId::new(0, 0),
        }],
    );

    assert!(events.is_empty());
    assert_eq!(query::gold(&world), 1000);
}

#[test]
fn selection_follows_the_hero_list() {
    let mut world = World::new();
    let ids = placed_ids(&apply_all(
        &mut world,
        [
            Command::PlaceHero {
                kind: HeroKind::Archer,
                cell: CellCoord::new(0, 0),
            },
            Command::PlaceHero {
                kind: HeroKind::Warrior,
                cell: CellCoord::new(4, 4),
            },
        ],
    ));

    let _ = apply_all(&mut world, [Command::SelectHero { hero: Some(ids[1]) }]);
    let selected = query::selected_hero(&world).expect("warrior selected");
    assert_eq!(selected.kind, HeroKind::Warrior);
    assert!(selected.selected);
    assert_eq!(
        query::hero_view(&world)
            .iter()
            .filter(|hero| hero.selected)
            .count(),
        1
    );

    let events = apply_all(&mut world, [Command::SelectHero { hero: None }]);
    assert_eq!(
        events,
        vec![
            Event::HeroSelected { hero: None },
            Event::RangeOverlayChanged { visible: false },
        ]
    );
    assert!(query::selected_hero(&world).is_none());
}

#[test]
fn wave_cycle_tracks_counter_and_pause() {
    let mut world = World::new();
    let _ = apply_all(
        &mut world,
        [Command::PlaceHero {
            kind: HeroKind::Archer,
            cell: CellCoord::new(0, 0),
        }],
    );

    let events = apply_all(
        &mut world,
        [Command::StartWave, Command::TogglePause, Command::StartWave],
    );

    assert_eq!(
        events,
        vec![
            Event::WaveStarted { wave: 1 },
            Event::PauseToggled { paused: true },
            Event::WaveStartRejected {
                reason: hero_defense_core::WaveError::AlreadyActive,
            },
        ]
    );
    assert!(query::is_paused(&world));
    assert_eq!(query::wave(&world), 2);
    assert_eq!(query::lives(&world), 20);
}
