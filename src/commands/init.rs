use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".gridcrit.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# gridcrit configuration

[io]
# Table of substations, overwritten in place with the derived columns.
path = "criticality.csv"
delimiter = ";"
encoding = "latin-1"

[columns]
# Source columns holding the raw attributes.
power_draw = "Übertragungsleistung Bezug"
residents = "Einwohner"
node_score = "NKB"
infrastructure = "Infrastruktur"
commercial = "Gewerbe"
# Display names the band columns are written under. With these defaults,
# "Einwohner", "NKB", "Infrastruktur" and "Gewerbe" replace the source
# columns; a second run on the output would then classify band values as
# raw attributes. Pick distinct names if the raw columns must survive.
power_draw_band = "Leistung"
residents_band = "Einwohner"
node_score_band = "NKB"
infrastructure_band = "Infrastruktur"
commercial_band = "Gewerbe"
index = "II_N"

[thresholds.power_draw]
low = 83.8
high = 185.53

[thresholds.residents]
low = 130.0
high = 274.0

[thresholds.node_score]
high = 0.5

[thresholds.infrastructure]
high = 2.0

[thresholds.commercial]
low = 4.0
high = 13.0

# AHP pairwise-comparison weights; only their ratios matter.
[weights]
power_draw = 0.062
residents = 0.250
node_score = 0.118
infrastructure = 0.537
commercial = 0.033
"#;

    fs::write(&config_path, default_config)?;
    println!("Created .gridcrit.toml configuration file");

    Ok(())
}
