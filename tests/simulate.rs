use cvd_sim::color::rgb;
use cvd_sim::{brettel, machado, matrix, simulate, Color8, Dichromacy, Model, Vision};

fn grid() -> Vec<Color8> {
    let mut out = vec![];
    for r in (0..=255u16).step_by(51) {
        for g in (0..=255u16).step_by(51) {
            for b in (0..=255u16).step_by(51) {
                out.push(Color8::new(r as u8, g as u8, b as u8));
            }
        }
    }
    out
}

#[test]
fn normal_is_identity_under_every_model() {
    for c in grid() {
        for model in Model::ALL {
            assert_eq!(simulate(c, Vision::Normal, model), c);
        }
    }
}

#[test]
fn dispatch_matches_module_functions() {
    let c = rgb("#8040c8");
    assert_eq!(
        simulate(c, Vision::Protanopia, Model::Brettel),
        brettel::simulate(c, Dichromacy::Protan, 1.0)
    );
    assert_eq!(
        simulate(c, Vision::Deuteranomaly, Model::Brettel),
        brettel::simulate(c, Dichromacy::Deutan, brettel::PARTIAL_SEVERITY)
    );
    assert_eq!(
        simulate(c, Vision::Tritanopia, Model::Machado),
        machado::simulate(c, Dichromacy::Tritan)
    );
    assert_eq!(
        simulate(c, Vision::Protanomaly, Model::Machado),
        matrix::anomylize(c, machado::simulate(c, Dichromacy::Protan))
    );
    for v in Vision::ALL {
        assert_eq!(simulate(c, v, Model::Matrix), matrix::simulate(c, v));
    }
}

#[test]
fn achromatopsia_is_grey_under_every_model() {
    for c in grid() {
        for model in Model::ALL {
            let out = simulate(c, Vision::Achromatopsia, model);
            assert_eq!(out.red, out.green, "{:?} {:?}", c, model);
            assert_eq!(out.green, out.blue, "{:?} {:?}", c, model);
        }
    }
}

// The partial forms are convex blends toward the full deficiency, so each
// channel must land between the original and the fully-simulated value.
#[test]
fn anomaly_forms_sit_between_original_and_full() {
    fn between(lo_hi: (u8, u8), v: u8) -> bool {
        let (a, b) = lo_hi;
        (a.min(b)..=a.max(b)).contains(&v)
    }

    for c in grid() {
        for model in Model::ALL {
            for (partial, full) in [
                (Vision::Protanomaly, Vision::Protanopia),
                (Vision::Deuteranomaly, Vision::Deuteranopia),
                (Vision::Tritanomaly, Vision::Tritanopia),
                (Vision::Achromatomaly, Vision::Achromatopsia),
            ] {
                let opia = simulate(c, full, model);
                let omaly = simulate(c, partial, model);
                assert!(between((c.red, opia.red), omaly.red), "{:?} {:?} {:?}", c, model, partial);
                assert!(between((c.green, opia.green), omaly.green));
                assert!(between((c.blue, opia.blue), omaly.blue));
            }
        }
    }
}

// Every model and vision is total over the whole grid; the 8-bit output type
// plus the clamping in each encode path keeps results in gamut.
#[test]
fn all_models_are_total_over_the_grid() {
    for c in grid() {
        for v in Vision::ALL {
            for model in Model::ALL {
                let _ = simulate(c, v, model);
            }
        }
    }
}

// Severity outside [0,1] extrapolates rather than clamping; channels keep
// moving in the same direction they moved between 0 and 1.
#[test]
fn brettel_severity_extrapolates() {
    let c = Color8::new(0, 128, 0);
    let at_1 = brettel::simulate(c, Dichromacy::Deutan, 1.0);
    let beyond = brettel::simulate(c, Dichromacy::Deutan, 1.5);
    assert!(beyond.red >= at_1.red);
    assert!(beyond.green <= at_1.green);
    assert!(beyond.blue >= at_1.blue);

    // Negative severity pushes away from the deficiency; the red and blue
    // channels go negative in linear space and get clamped by the encode.
    let below = brettel::simulate(c, Dichromacy::Deutan, -0.5);
    assert_eq!(below.red, 0);
    assert_eq!(below.blue, 0);
    assert!(below.green > c.green);
}
