//! Turtle documents for an sfizz preset bundle.
//!
//! Both renderers are pure: only the preset name and the SFZ file name vary,
//! every other byte is fixed so LV2 hosts discover the preset.

/// URI of the sfizz plugin the presets apply to.
pub const SFIZZ_URI: &str = "http://sfztools.github.io/sfizz";

/// File name of the tuning symlink inside each bundle.
pub const DEFAULT_SCALE_FILE_NAME: &str = "DefaultScale.scl";

pub const MANIFEST_FILE_NAME: &str = "manifest.ttl";

/// Port symbol and default value, in the order they are written.
pub const PORT_DEFAULTS: [(&str, f64); 13] = [
    ("freewheeling", 0.0),
    ("freewheeling_oscillator_quality", 3.0),
    ("freewheeling_sample_quality", 10.0),
    ("num_voices", 64.0),
    ("oscillator_quality", 1.0),
    ("oversampling", 1.0),
    ("preload_size", 8192.0),
    ("sample_quality", 2.0),
    ("scala_root_key", 60.0),
    ("stretched_tuning", 0.0),
    ("sustain_cancels_release", 0.0),
    ("tuning_frequency", 440.0),
    ("volume", 0.0),
];

/// MIDI CC defaults stored in the plugin state block.
pub const CC_DEFAULTS: [(&str, &str); 4] = [
    ("cc001", "0.5"),
    ("cc007", "1.0"),
    ("cc010", "1.0"),
    ("cc011", "1.0"),
];

const PREFIXES: &str = "@prefix atom: <http://lv2plug.in/ns/ext/atom#> .
@prefix lv2: <http://lv2plug.in/ns/lv2core#> .
@prefix pset: <http://lv2plug.in/ns/ext/presets#> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix state: <http://lv2plug.in/ns/ext/state#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
";

/// `<preset name>.ttl`
pub fn preset_file_name(preset_name: &str) -> String {
    format!("{preset_name}.ttl")
}

/// Renders `manifest.ttl`, pointing the host at `<preset name>.ttl`.
pub fn render_manifest(preset_name: &str) -> String {
    let preset_file = preset_file_name(preset_name);
    format!(
        "{PREFIXES}
<{preset_file}>
	lv2:appliesTo <{SFIZZ_URI}> ;
	a pset:Preset ;
	rdfs:seeAlso <{preset_file}> .
"
    )
}

/// Renders the preset description document for one instrument.
pub fn render_preset(preset_name: &str, sfz_file_name: &str) -> String {
    let ports = PORT_DEFAULTS
        .iter()
        .map(|(symbol, value)| {
            format!("[\n\t\tlv2:symbol \"{symbol}\" ;\n\t\tpset:value {value:.1}\n\t]")
        })
        .collect::<Vec<_>>()
        .join(" , ");

    let mut state = vec![
        format!("<{SFIZZ_URI}:sfzfile> <{sfz_file_name}>"),
        format!("<{SFIZZ_URI}:tuningfile> <{DEFAULT_SCALE_FILE_NAME}>"),
    ];
    state.extend(
        CC_DEFAULTS
            .iter()
            .map(|(cc, value)| format!("<{SFIZZ_URI}#{cc}> \"{value}\"^^xsd:float")),
    );
    let state = state.join(" ;\n\t\t");

    format!(
        "{PREFIXES}
<>
	a pset:Preset ;
	lv2:appliesTo <{SFIZZ_URI}> ;
	rdfs:label \"{preset_name}\" ;
	lv2:port {ports} ;
	state:state [
		{state}
	] .

"
    )
}
