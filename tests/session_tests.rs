/// Tests for the session controller: tick sequencing, break/place actions,
/// inventory crediting and the session state machine.
use glam::{IVec3, Vec3};
use raycraft::player::EYE_HEIGHT;
use raycraft::{GameMode, GameSession, InputIntents, SessionState, Slot, Voxel};

/// Session with the player parked in a hand-carved air pocket, facing +x
/// (creative, so gravity cannot disturb the scenario)
fn pocket_session() -> GameSession {
    let mut session = GameSession::new(1, GameMode::Creative);
    for x in 0..8 {
        for z in 0..4 {
            for y in 44..54 {
                session.world.set_voxel(IVec3::new(x, y, z), Voxel::Air);
            }
        }
    }
    session.player.position = Vec3::new(1.5, 48.0 + EYE_HEIGHT, 1.5);
    session.player.yaw = 0.0;
    session.player.pitch = 0.0;
    session
}

#[test]
fn breaking_a_block_credits_exactly_one_unit_and_clears_the_cell() {
    let mut session = pocket_session();
    // Eye level is 49.8; a block at (3, 49, 1) sits dead ahead
    let target = IVec3::new(3, 49, 1);
    session.world.set_voxel(target, Voxel::Cobblestone);

    let mut intents = InputIntents::default();
    intents.primary = true;
    session.tick(&intents);

    assert_eq!(session.world.get_voxel(target), Voxel::Air, "targeted voxel mined to air");
    assert_eq!(
        session.inventory.slot(0),
        Slot { kind: Some(Voxel::Cobblestone), count: 1 },
        "exactly one unit credited to the first slot"
    );
    assert!(session.inventory.invariant_holds());
}

#[test]
fn placing_consumes_the_selected_slot_and_fills_the_face_cell() {
    let mut session = pocket_session();
    let wall = IVec3::new(4, 49, 1);
    session.world.set_voxel(wall, Voxel::Stone);
    session.inventory.add(Voxel::Brick);

    let mut intents = InputIntents::default();
    intents.secondary = true;
    session.tick(&intents);

    // Facing +x, the hit face is -x, so the brick lands one cell nearer
    assert_eq!(session.world.get_voxel(IVec3::new(3, 49, 1)), Voxel::Brick);
    assert_eq!(session.world.get_voxel(wall), Voxel::Stone, "hit voxel untouched");
    assert_eq!(session.inventory.slot(0), Slot::EMPTY, "last unit consumed clears the slot");
    assert!(session.inventory.invariant_holds());
}

#[test]
fn placing_with_an_empty_hand_is_a_no_op() {
    let mut session = pocket_session();
    let wall = IVec3::new(4, 49, 1);
    session.world.set_voxel(wall, Voxel::Stone);

    let mut intents = InputIntents::default();
    intents.secondary = true;
    session.tick(&intents);

    assert_eq!(session.world.get_voxel(IVec3::new(3, 49, 1)), Voxel::Air);
    assert!(session.inventory.invariant_holds());
}

#[test]
fn breaking_tnt_ignites_instead_of_mining() {
    let mut session = pocket_session();
    let target = IVec3::new(3, 49, 1);
    session.world.set_voxel(target, Voxel::Tnt);

    let mut intents = InputIntents::default();
    intents.primary = true;
    session.tick(&intents);

    assert_eq!(session.world.get_voxel(target), Voxel::Air);
    assert_eq!(session.entities.len(), 1, "tnt must arm an entity, not enter the inventory");
    assert!(session.inventory.slot(0).is_empty());
}

#[test]
fn out_of_range_target_means_no_action() {
    let mut session = pocket_session();
    let far = IVec3::new(7, 49, 1); // distance ~5.5, past the 5 unit pick ray
    session.world.set_voxel(far, Voxel::Stone);

    let mut intents = InputIntents::default();
    intents.primary = true;
    session.tick(&intents);

    assert_eq!(session.world.get_voxel(far), Voxel::Stone);
    assert!(session.inventory.slot(0).is_empty());
}

#[test]
fn paused_session_does_not_tick() {
    let mut session = pocket_session();
    let mut intents = InputIntents::default();
    intents.toggle_pause = true;
    session.tick(&intents);
    assert_eq!(session.state(), SessionState::Paused);
    assert_eq!(session.tick_count(), 0, "the toggle tick itself must not simulate");

    let before = session.player.position;
    let mut move_intents = InputIntents::default();
    move_intents.move_forward = 1.0;
    session.tick(&move_intents);
    assert_eq!(session.tick_count(), 0);
    assert_eq!(session.player.position, before, "paused player cannot move");

    // Unpause resumes ticking
    let mut resume = InputIntents::default();
    resume.toggle_pause = true;
    session.tick(&resume);
    session.tick(&move_intents);
    assert_eq!(session.tick_count(), 1);
}

#[test]
fn resume_tick_does_not_simulate() {
    let mut session = pocket_session();
    let mut toggle = InputIntents::default();
    toggle.toggle_pause = true;
    session.tick(&toggle);
    assert_eq!(session.state(), SessionState::Paused);

    // An unpause carrying movement input transitions but must not move the
    // player or advance the tick counter
    let before = session.player.position;
    let mut resume = InputIntents::default();
    resume.toggle_pause = true;
    resume.move_forward = 1.0;
    session.tick(&resume);
    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(session.tick_count(), 0, "the transition tick must not simulate");
    assert_eq!(session.player.position, before);
}

#[test]
fn inventory_screen_suspends_ticking_like_pause() {
    let mut session = pocket_session();
    let mut intents = InputIntents::default();
    intents.toggle_inventory = true;
    session.tick(&intents);
    assert_eq!(session.state(), SessionState::InventoryOpen);
    session.tick(&InputIntents::default());
    assert_eq!(session.tick_count(), 0);
}

#[test]
fn slot_selection_routes_placement() {
    let mut session = pocket_session();
    session.inventory.add(Voxel::Planks); // slot 0
    session.inventory.add(Voxel::Glass); // slot 1
    let wall = IVec3::new(4, 49, 1);
    session.world.set_voxel(wall, Voxel::Stone);

    let mut intents = InputIntents::default();
    intents.slot_select = Some(1);
    intents.secondary = true;
    session.tick(&intents);

    assert_eq!(
        session.world.get_voxel(IVec3::new(3, 49, 1)),
        Voxel::Glass,
        "selection applies before the place action in the same tick"
    );
}

#[test]
fn reset_discards_edits_entities_and_inventory() {
    let mut session = pocket_session();
    let target = IVec3::new(3, 49, 1);
    session.world.set_voxel(target, Voxel::Tnt);

    let mut intents = InputIntents::default();
    intents.primary = true;
    session.tick(&intents);
    assert_eq!(session.entities.len(), 1);

    session.reset();
    assert!(session.entities.is_empty());
    assert!(session.inventory.slot(0).is_empty());
    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(session.tick_count(), 0);
    // The hand-carved pocket is gone too: terrain regenerated from the seed
    let mut fresh = GameSession::new(1, GameMode::Creative);
    assert_eq!(
        session.world.get_voxel(target),
        fresh.world.get_voxel(target),
        "reset world must match a freshly generated one"
    );
}
