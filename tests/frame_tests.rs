use std::f32::consts::PI;

use thinfilm::{
    material::{Material, Preset},
    problem::Problem,
    settings::{self, SAMPLE_STEP_PX},
};

// Tolerance for comparing angles in radians
const TOL: f32 = 1e-3;

#[test]
fn default_config_solves_to_five_beams() {
    let settings = settings::load_default_config().unwrap();
    assert_eq!(settings.film, Material::Preset(Preset::Mgf2));

    let frame = Problem::new(settings).unwrap().solve().unwrap();
    assert!(!frame.total_internal_reflection);
    assert_eq!(frame.beams.len(), 5);
    assert_eq!(frame.waveforms.len(), 5);
}

#[test]
fn reference_scenario_mgf2_on_glass() {
    // 15 deg, 100 nm MgF2 film, 500 nm light at 0.3 px/nm
    let mut settings = settings::load_default_config().unwrap();
    settings.incidence_angle_deg = 15.0;
    settings.film_thickness_nm = 100.0;

    let frame = Problem::new(settings).unwrap().solve().unwrap();

    // film is 30 px thick
    let bounds = &frame.boundaries;
    assert!((bounds.film_bottom_y - bounds.film_top_y - 30.0).abs() < 1e-4);

    // refracted leg bends to ~10.81 deg from vertical
    let refracted = &frame.beams[2];
    let direction = refracted.direction();
    let theta_t = (direction.x / direction.y).atan();
    assert!((theta_t - 0.188_66).abs() < TOL);

    // MgF2 (1.38) on glass (1.5) flips phase at the substrate: with the
    // wave anchored at the surface, both reflections carry the pi shift
    let reflected = &frame.beams[1];
    assert!((reflected.start_phase - PI).abs() < TOL);
}

#[test]
fn normal_incidence_is_vertical() {
    let mut settings = settings::load_default_config().unwrap();
    settings.incidence_angle_deg = 0.0;

    let frame = Problem::new(settings).unwrap().solve().unwrap();
    for beam in &frame.beams {
        assert!(
            (beam.start.x - beam.end.x).abs() < 1e-4,
            "{} beam is not vertical",
            beam.label
        );
    }
}

#[test]
fn transmitted_exit_angle_matches_incidence() {
    let mut settings = settings::load_default_config().unwrap();
    settings.incidence_angle_deg = 30.0;
    settings.film = Material::Preset(Preset::Zns);
    settings.film_thickness_nm = 700.0;

    let problem = Problem::new(settings).unwrap();
    let frame = problem.solve().unwrap();

    let transmitted = frame.beams.last().unwrap();
    let direction = transmitted.direction();
    let exit = (direction.x / -direction.y).atan();
    assert!((exit - problem.settings.incidence_angle_rad()).abs() < TOL);
}

#[test]
fn waveform_sampling_density() {
    let settings = settings::load_default_config().unwrap();
    let frame = Problem::new(settings).unwrap().solve().unwrap();

    for (beam, polyline) in frame.beams.iter().zip(&frame.waveforms) {
        let expected = (beam.length() / SAMPLE_STEP_PX).ceil() as usize + 1;
        assert_eq!(polyline.len(), expected, "{} beam", beam.label);
        for point in polyline {
            assert!(point.x.is_finite() && point.y.is_finite());
        }
    }
}

#[test]
fn frames_are_bit_identical_across_solves() {
    let settings = settings::load_default_config().unwrap();
    let problem = Problem::new(settings).unwrap();
    assert_eq!(problem.solve().unwrap(), problem.solve().unwrap());
}

#[test]
fn thickness_extremes_stay_well_formed() {
    for thickness in [10.0, 700.0] {
        let mut settings = settings::load_default_config().unwrap();
        settings.film_thickness_nm = thickness;

        let frame = Problem::new(settings).unwrap().solve().unwrap();
        let bounds = &frame.boundaries;
        assert!(bounds.film_top_y < bounds.film_bottom_y);
        assert!(bounds.film_bottom_y <= bounds.substrate_bottom_y);
    }
}
