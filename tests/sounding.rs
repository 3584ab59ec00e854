use rocket_assembly::builder::{
    Director, EngineKind, Payload, RocketBuilder, SoundingRocketBuilder, assemble,
};

#[test]
fn sounding_rocket_has_single_solid_motor() {
    let mut builder = SoundingRocketBuilder::new();
    let rocket = assemble(&mut builder, Payload::probe(120.0)).expect("sounding assembly");

    assert_eq!(rocket.name, "Sounding");
    assert_eq!(rocket.stage_count(), 1);
    let stage = &rocket.stages()[0];
    assert_eq!(stage.engine_count(), 1);
    assert_eq!(stage.engine_kind(), Some(EngineKind::Solid));
    assert_eq!(stage.engines()[0].thrust, 120.0);
    assert_eq!(stage.fuel_level(), None);
}

#[test]
fn sounding_rocket_ignores_weight_for_staging() {
    let director = Director::new();
    for weight in [0.0, 999.0, 1_000.0, 50_000.0] {
        let rocket = director
            .prepare_rocket(&mut SoundingRocketBuilder::new(), Payload::probe(weight))
            .expect("assembly");
        assert_eq!(rocket.stage_count(), 1, "weight {weight}");
        assert_eq!(rocket.stages()[0].total_thrust(), weight);
    }
}

#[test]
fn refuel_step_is_a_no_op_for_solid_motors() {
    let mut builder = SoundingRocketBuilder::named("Probe Lofter");
    builder.create_rocket().expect("create");
    builder.add_payload(Payload::probe(42.0)).expect("payload");
    builder.add_stages().expect("stages");
    let before = builder.rocket().expect("rocket").clone();
    builder.refuel_rocket().expect("refuel");
    let after = builder.take_rocket().expect("finished");
    assert_eq!(before, after);
    assert_eq!(after.name, "Probe Lofter");
}
