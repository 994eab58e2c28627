// Integration tests for the conservation laws of perform_interaction:
// whatever the channel, energy and baryon number must balance between the
// remaining parent and the emitted secondaries.

use std::io::Write;
use std::path::PathBuf;

use photodis_for_mc::{
    history_rng, nucleus_id, nucleus_rest_energy, Candidate, ChannelProducts, PhotoDisintegration,
    PhotonField, RATE_SAMPLES,
};

fn write_table(name: &str, lines: &[String]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("photodis_{}_{}.txt", name, std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "# generated by tests").unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    path
}

fn flat_line(z: i32, n: i32, channel: i32, rate: f64) -> String {
    let samples = vec![rate.to_string(); RATE_SAMPLES].join(" ");
    format!("{} {} {} {}", z, n, channel, samples)
}

fn fe56_candidate() -> Candidate {
    let id = nucleus_id(56, 26);
    Candidate::new(id, 1e10 * nucleus_rest_energy(id), 0.0)
}

#[test]
fn energy_and_baryon_number_conserved_for_every_channel_shape() {
    // A representative set of channel codes: single nucleons, light
    // fragments, and a many-product channel.
    let channels = [100_000, 10_000, 1_000, 100, 10, 1, 110_000, 210_001, 111_111];

    for channel in channels {
        let path = write_table(
            &format!("conservation_{}", channel),
            &[flat_line(26, 30, channel, 1.0)],
        );
        let module = PhotoDisintegration::from_file(PhotonField::Cmb, &path).unwrap();
        std::fs::remove_file(&path).ok();

        let mut candidate = fe56_candidate();
        let initial_energy = candidate.current.energy();
        let initial_a = candidate.current.mass_number();

        let mut rng = history_rng(7, channel as u64);
        assert!(module.set_next_interaction(&mut candidate, &mut rng));
        module.perform_interaction(&mut candidate);

        let parent_energy = if candidate.is_active() {
            candidate.current.energy()
        } else {
            0.0
        };
        let parent_a = if candidate.is_active() {
            candidate.current.mass_number()
        } else {
            0
        };

        let secondary_energy: f64 = candidate.secondaries().iter().map(|s| s.energy()).sum();
        let secondary_a: i32 = candidate.secondaries().iter().map(|s| s.mass_number()).sum();

        let total = parent_energy + secondary_energy;
        assert!(
            (total - initial_energy).abs() <= 1e-12 * initial_energy,
            "channel {}: energy {} != {}",
            channel,
            total,
            initial_energy
        );
        assert_eq!(
            parent_a + secondary_a,
            initial_a,
            "channel {}: baryon number not conserved",
            channel
        );

        // Charge bookkeeping against the decoded channel
        let products = ChannelProducts::decode(channel);
        assert_eq!(candidate.current.charge_number(), 26 - products.charge_loss());
    }
}

#[test]
fn full_disintegration_hands_all_energy_to_secondaries() {
    // Be-9 emitting 1 neutron and 2 He-4 loses all 9 nucleons.
    let path = write_table("full_disintegration", &[flat_line(4, 5, 100_002, 1.0)]);
    let module = PhotoDisintegration::from_file(PhotonField::Cmb, &path).unwrap();
    std::fs::remove_file(&path).ok();

    let id = nucleus_id(9, 4);
    let mut candidate = Candidate::new(id, 1e10 * nucleus_rest_energy(id), 0.0);
    let initial_energy = candidate.current.energy();

    let mut rng = history_rng(7, 0);
    assert!(module.set_next_interaction(&mut candidate, &mut rng));
    module.perform_interaction(&mut candidate);

    assert!(!candidate.is_active());
    assert_eq!(candidate.current.energy(), 0.0);

    let secondaries = candidate.secondaries();
    assert_eq!(secondaries.len(), 3);
    let secondary_a: i32 = secondaries.iter().map(|s| s.mass_number()).sum();
    assert_eq!(secondary_a, 9);
    let secondary_energy: f64 = secondaries.iter().map(|s| s.energy()).sum();
    assert!((secondary_energy - initial_energy).abs() <= 1e-12 * initial_energy);
}

#[test]
fn single_channel_round_trip_always_selected() {
    let path = write_table("round_trip", &[flat_line(26, 30, 100_000, 1.0)]);
    let module = PhotoDisintegration::from_file(PhotonField::Cmb, &path).unwrap();
    std::fs::remove_file(&path).ok();

    let mut rng = history_rng(11, 0);
    for _ in 0..500 {
        let mut candidate = fe56_candidate();
        assert!(module.set_next_interaction(&mut candidate, &mut rng));
        let state = candidate.interaction_state(module.description()).unwrap();
        assert_eq!(state.channel, 100_000);
        assert!(state.distance > 0.0);
    }
}

#[test]
fn reproposal_overwrites_pending_state() {
    let path = write_table("reproposal", &[flat_line(26, 30, 100_000, 1.0)]);
    let module = PhotoDisintegration::from_file(PhotonField::Cmb, &path).unwrap();
    std::fs::remove_file(&path).ok();

    let mut candidate = fe56_candidate();
    let mut rng = history_rng(3, 0);

    assert!(module.set_next_interaction(&mut candidate, &mut rng));
    let first = *candidate.interaction_state(module.description()).unwrap();
    assert!(module.set_next_interaction(&mut candidate, &mut rng));
    let second = *candidate.interaction_state(module.description()).unwrap();

    // Fresh draws, fresh distance; the applier only ever sees the latest.
    assert_ne!(first.distance, second.distance);
    module.perform_interaction(&mut candidate);
    assert_eq!(candidate.secondaries().len(), 1);
}
