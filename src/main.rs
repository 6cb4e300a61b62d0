use anyhow::{Context, Result};
use biosignalml::mapping::{Mapping, ProfileConfig};
use biosignalml::rdf::{load_turtle, write_turtle, RdfStore};
use biosignalml::{unit_term, Category, NamespaceManager, Recording, Resource, RuleIndex, Signal};
use chrono::NaiveDate;

const EDF_PROFILE: &str = include_str!("../profiles/edf.yaml");

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("BioSignalML metadata mapping v{}", biosignalml::version());
    println!("==========================================");
    println!();

    let profile = ProfileConfig::from_yaml_str(EDF_PROFILE).context("loading EDF profile")?;
    println!("Loaded profile '{}' with {} rules", profile.name, profile.rules.len());
    let overrides = profile.into_rules(&NamespaceManager::new())?;
    let mapping = Mapping::with_overrides(&RuleIndex::bsml(), [overrides]);

    let turtle = demo_generate(&mapping)?;
    demo_interpret(&mapping, &turtle)?;

    Ok(())
}

fn demo_generate(mapping: &Mapping) -> Result<String> {
    println!("\n=== Demo 1: Recording → statements ===");

    let mut recording = Recording::new("http://example.org/recording/sleep01")
        .with_metadata("patient", "X F 01-JAN-1970 anon");
    recording.format = Some("application/x-edf".to_string());
    recording.common.label = Some("Overnight sleep study".to_string());
    recording.starttime = NaiveDate::from_ymd_opt(2011, 4, 5).and_then(|d| d.and_hms_opt(22, 30, 0));
    recording.duration = Some(28_800.5);

    let mut signal = Signal::in_recording("http://example.org/recording/sleep01/signal/0", &recording)
        .with_metadata("transducer", "AgAgCl electrode");
    signal.common.label = Some("EEG Fpz-Cz".to_string());
    signal.units = unit_term("uV");
    signal.rate = Some(100.0);
    signal.index = Some(0);

    let mut graph = RdfStore::new();
    let added = mapping.add_to_graph(&recording, &mut graph)?;
    println!("✓ Recording: {} statements", added);

    let mut stream = mapping.statements(&signal)?;
    let statements: Vec<_> = stream.by_ref().collect();
    for fallback in stream.fallbacks() {
        println!("! {} kept unconverted: {}", fallback.attribute, fallback.error);
    }
    println!("✓ Signal: {} statements", statements.len());
    graph.extend(statements);

    let turtle = write_turtle(graph.iter())?;
    println!("\n{}", turtle);
    Ok(turtle)
}

fn demo_interpret(mapping: &Mapping, turtle: &str) -> Result<()> {
    println!("\n=== Demo 2: statements → attributes ===");

    let graph = load_turtle(turtle)?;
    println!("✓ Parsed {} statements", graph.len());

    let mut recording = Recording::new("http://example.org/recording/sleep01");
    let applied = mapping.update_from_graph(&mut recording, &graph)?;
    println!("✓ Applied {} values to recording", applied);
    println!("  label:     {:?}", recording.common.label);
    println!("  starttime: {:?}", recording.starttime);
    println!("  duration:  {:?}", recording.duration);
    println!("  patient:   {:?}", recording.metadata().get("patient"));

    let signal_metadata = mapping.collect_metadata(
        graph
            .iter()
            .filter(|t| t.subject.id().ends_with("/signal/0")),
        Some(&Category::SIGNAL),
    );
    let mut names: Vec<_> = signal_metadata.keys().collect();
    names.sort();
    println!("✓ Signal attributes: {:?}", names);

    Ok(())
}
