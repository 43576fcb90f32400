use std::env;
use std::path::PathBuf;

use fixtura_core::ClassCatalog;
use fixtura_generate::random::{double_in_range, long_in_range, nice_string};
use fixtura_introspect::{ExclusionSpec, build_class_info};
use tracing_subscriber::EnvFilter;

/// Prints one sample value per attribute of a catalog class.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let catalog_path = args.next().map(PathBuf::from).ok_or("missing catalog path")?;
    let class_name = args.next().ok_or("missing class name")?;

    let catalog = ClassCatalog::from_json(&std::fs::read_to_string(&catalog_path)?)?;
    let info = build_class_info(&catalog, &class_name, None, &ExclusionSpec::default())?;

    for attribute in &info {
        let sample = match attribute.ty().boxed().name.as_str() {
            "java.lang.Integer" | "java.lang.Long" | "java.lang.Short" => {
                serde_json::json!(long_in_range(0, 1_000))
            }
            "java.lang.Double" | "java.lang.Float" => serde_json::json!(double_in_range(0.0, 1_000.0)),
            "java.lang.Boolean" => serde_json::json!(long_in_range(0, 1) == 1),
            _ => serde_json::json!(nice_string(10)),
        };
        println!("{}: {} = {}", attribute.name(), attribute.ty(), sample);
    }
    Ok(())
}
