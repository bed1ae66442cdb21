//! Built-in builds of the FMC ADC reference design.

use hdlsyn_targets::{ModuleDirSet, Modules};

use crate::synth::{Action, SynthManifest};

fn xilinx_synthesis(device: &str, grade: &str, package: &str, top: &str, dir: &str) -> SynthManifest {
    SynthManifest {
        target: "xilinx".into(),
        action: Action::Synthesis,
        syn_device: device.into(),
        syn_grade: grade.into(),
        syn_package: package.into(),
        syn_top: top.into(),
        syn_project: format!("{top}.xise"),
        modules: Modules {
            local: ModuleDirSet::from(vec![dir.to_string()]),
        },
    }
}

/// The KC705 FMC250M build; also the seed for new build templates.
pub(crate) fn fmc250m_kc705() -> SynthManifest {
    xilinx_synthesis(
        "xc7k325t",
        "-2",
        "ffg900",
        "kintex7_fmc_adc_250m_4ch",
        "../../top/kc705/fmc250m",
    )
}

/// Resolve a built-in build name to its manifest.
pub fn resolve_build(name: &str) -> Option<SynthManifest> {
    let manifest = match name {
        // Kintex-7 top, but ISE flow runs on a Spartan-6 part for now.
        "fmc130m_kc705" => xilinx_synthesis(
            "xc6slx45t",
            "-3",
            "fgg484",
            "kintex7_fmc_adc_130m_4ch",
            "../../top/kc705/fmc130m",
        ),
        "fmc130m_ml605_adc_test" => xilinx_synthesis(
            "xc6vlx240t",
            "-1",
            "ff1156",
            "virtex6_fmc_adc_130m_4ch_adc_test",
            "../../top/ml605/fmc130m_adc_test",
        ),
        "fmc250m_afc" => xilinx_synthesis(
            "xc7a200t",
            "-2",
            "ffg1156",
            "artix7_amc_fmc_adc_250m_4ch",
            "../../top/afc/fmc250m",
        ),
        "fmc250m_kc705" => fmc250m_kc705(),
        "fmc250m_ml605" => xilinx_synthesis(
            "xc6vlx240t",
            "-1",
            "ff1156",
            "virtex6_fmc_adc_250m_4ch",
            "../../top/ml605/fmc250m",
        ),
        "fmc250m_ml605_adc_test" => xilinx_synthesis(
            "xc6vlx240t",
            "-1",
            "ff1156",
            "virtex6_fmc_adc_250m_4ch_adc_test",
            "../../top/ml605/fmc250m_adc_test",
        ),
        _ => return None,
    };
    Some(manifest)
}

/// List all built-in build names.
pub fn builtin_builds() -> Vec<(&'static str, &'static str)> {
    vec![
        ("fmc130m_kc705", "FMC130M 4-channel ADC on KC705"),
        ("fmc130m_ml605_adc_test", "FMC130M ADC test design on ML605 (Virtex-6)"),
        ("fmc250m_afc", "FMC250M 4-channel ADC on AFC (Artix-7 200T)"),
        ("fmc250m_kc705", "FMC250M 4-channel ADC on KC705 (Kintex-7)"),
        ("fmc250m_ml605", "FMC250M 4-channel ADC on ML605 (Virtex-6)"),
        ("fmc250m_ml605_adc_test", "FMC250M ADC test design on ML605 (Virtex-6)"),
    ]
}
