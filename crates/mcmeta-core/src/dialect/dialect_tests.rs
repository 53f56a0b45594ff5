#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case("plugin.yml", Dialect::Bukkit)]
#[test_case("bungee.yml", Dialect::BungeeCord)]
#[test_case("fabric.mod.json", Dialect::Fabric)]
#[test_case("mcmod.info", Dialect::ForgeLegacy)]
#[test_case("META-INF/mods.toml", Dialect::Forge)]
#[test_case("META-INF/neoforge.mods.toml", Dialect::NeoForge)]
#[test_case("META-INF/sponge_plugins.json", Dialect::Sponge)]
#[test_case("velocity-plugin.json", Dialect::Velocity)]
fn Dialect___from_path___recognizes_table_entry(path: &str, expected: Dialect) {
    assert_eq!(Dialect::from_path(path), Some(expected));
}

#[test_case("README.md")]
#[test_case("Plugin.yml")]
#[test_case("plugins/plugin.yml")]
#[test_case("/plugin.yml")]
#[test_case("meta-inf/mods.toml")]
#[test_case("mods.toml")]
#[test_case(" fabric.mod.json")]
#[test_case("")]
fn Dialect___from_path___rejects_near_misses(path: &str) {
    assert_eq!(Dialect::from_path(path), None);
}

#[test]
fn Dialect___path___round_trips_through_from_path() {
    for dialect in Dialect::ALL {
        assert_eq!(Dialect::from_path(dialect.path()), Some(dialect));
    }
}

#[test]
fn Dialect___base_format___groups_dialects() {
    let yaml = Dialect::ALL
        .iter()
        .filter(|d| d.base_format() == BaseFormat::Yaml)
        .count();
    let json = Dialect::ALL
        .iter()
        .filter(|d| d.base_format() == BaseFormat::Json)
        .count();
    let toml = Dialect::ALL
        .iter()
        .filter(|d| d.base_format() == BaseFormat::Toml)
        .count();

    assert_eq!((yaml, json, toml), (2, 4, 2));
}

#[test]
fn Dialect___display___uses_readable_name() {
    assert_eq!(Dialect::ForgeLegacy.to_string(), "Forge (legacy)");
    assert_eq!(Dialect::NeoForge.to_string(), "NeoForge");
}
