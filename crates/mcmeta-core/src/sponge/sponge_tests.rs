#![allow(non_snake_case)]

use super::*;

const TATERLIB_SPONGE_PLUGINS_JSON: &str = r#"{
  "loader": {
    "name": "java_plain",
    "version": "1.0"
  },
  "license": "GPL-3.0",
  "plugins": [
    {
      "id": "taterlib",
      "entrypoint": "dev.neuralnexus.taterloader.platforms.Sponge8LoaderPlugin",
      "name": "TaterLib",
      "description": "some more rando descripto words",
      "version": "0.1.0",
      "branding": {},
      "links": {
        "homepage": "https://some.homepage",
        "source": "https://some.repo",
        "issues": "https://some.issue.tracker"
      },
      "dependencies": [
        {
          "id": "spongeapi",
          "version": "8.0.0",
          "load-order": "after",
          "optional": false
        }
      ]
    }
  ]
}"#;

#[test]
fn SpongePlugin___decode___reads_loader_and_license() {
    let plugin = SpongePlugin::decode(TATERLIB_SPONGE_PLUGINS_JSON.as_bytes()).unwrap();

    assert_eq!(plugin.loader.name, "java_plain");
    assert_eq!(plugin.loader.version, "1.0");
    assert_eq!(plugin.license, "GPL-3.0");
    assert!(plugin.global.is_none());
}

#[test]
fn SpongePlugin___decode___reads_plugin_entry() {
    let plugin = SpongePlugin::decode(TATERLIB_SPONGE_PLUGINS_JSON.as_bytes()).unwrap();

    assert_eq!(plugin.plugins.len(), 1);
    let entry = &plugin.plugins[0];
    assert_eq!(entry.id, "taterlib");
    assert_eq!(
        entry.entrypoint,
        "dev.neuralnexus.taterloader.platforms.Sponge8LoaderPlugin"
    );
    assert_eq!(entry.name, "TaterLib");
    assert_eq!(entry.description, "some more rando descripto words");
    assert_eq!(entry.version, "0.1.0");
    assert_eq!(entry.branding, SpongeBranding::default());
    assert_eq!(entry.links.homepage, "https://some.homepage");
    assert_eq!(entry.links.source, "https://some.repo");
    assert_eq!(entry.links.issues, "https://some.issue.tracker");
    assert_eq!(plugin.identifier().unwrap(), "taterlib");
}

#[test]
fn SpongePlugin___dependency___decodes_load_order() {
    let plugin = SpongePlugin::decode(TATERLIB_SPONGE_PLUGINS_JSON.as_bytes()).unwrap();

    let dependency = &plugin.plugins[0].dependencies[0];
    assert_eq!(dependency.id, "spongeapi");
    assert_eq!(dependency.version, "8.0.0");
    assert_eq!(dependency.load_order, SpongeLoadOrder::After);
    assert!(!dependency.optional);
}

#[test]
fn SpongePlugin___dependency_without_load_order___is_undefined() {
    let json = r#"{
        "loader": {"name": "java_plain", "version": "1.0"},
        "plugins": [{"id": "p", "dependencies": [{"id": "spongeapi", "optional": true}]}]
    }"#;

    let plugin = SpongePlugin::from_json(json).unwrap();

    let dependency = &plugin.plugins[0].dependencies[0];
    assert_eq!(dependency.load_order, SpongeLoadOrder::Undefined);
    assert!(dependency.optional);
}

#[test]
fn SpongePlugin___unknown_load_order___returns_error() {
    let json = r#"{
        "loader": {"name": "java_plain", "version": "1.0"},
        "plugins": [{"id": "p", "dependencies": [{"id": "x", "load-order": "sideways"}]}]
    }"#;

    let result = SpongePlugin::from_json(json);

    assert!(matches!(result, Err(MetadataError::Json(_))));
}

#[test]
fn SpongePlugin___global_section___decodes() {
    let json = r#"{
        "loader": {"name": "java_plain", "version": "1.0"},
        "global": {
            "version": "2.1.0",
            "links": {"homepage": "https://example.org"},
            "contributors": [{"name": "dev", "description": "Lead"}]
        },
        "plugins": [{"id": "first"}, {"id": "second"}]
    }"#;

    let plugin = SpongePlugin::from_json(json).unwrap();

    let global = plugin.global.as_ref().unwrap();
    assert_eq!(global.version, "2.1.0");
    assert_eq!(global.links.homepage, "https://example.org");
    assert_eq!(global.contributors[0].description, "Lead");
    assert_eq!(plugin.identifiers(), vec!["first", "second"]);
}

#[test]
fn SpongePlugin___no_plugins___fails_with_empty_root_list() {
    let json = r#"{"loader": {"name": "java_plain", "version": "1.0"}, "plugins": []}"#;

    let result = SpongePlugin::from_json(json);

    assert!(matches!(
        result,
        Err(MetadataError::EmptyRootList {
            dialect: Dialect::Sponge
        })
    ));
}

#[test]
fn SpongePlugin___missing_loader___still_yields_identifier() {
    let plugin = SpongePlugin::from_json(r#"{"plugins": [{"id": "p"}]}"#).unwrap();

    assert_eq!(plugin.loader, SpongeLoader::default());
    assert_eq!(plugin.identifier().unwrap(), "p");
}

#[test]
fn SpongePlugin___plugin_without_id___returns_error() {
    let result = SpongePlugin::from_json(r#"{"plugins": [{"name": "Nameless"}]}"#);

    assert!(matches!(result, Err(MetadataError::Json(_))));
}

#[test]
fn SpongePluginEntry___effective_version___falls_back_to_global() {
    let json = r#"{
        "global": {"version": "2.0.0"},
        "plugins": [{"id": "inherits"}, {"id": "overrides", "version": "3.1.0"}]
    }"#;

    let plugin = SpongePlugin::from_json(json).unwrap();

    assert_eq!(plugin.plugins[0].effective_version(&plugin), "2.0.0");
    assert_eq!(plugin.plugins[1].effective_version(&plugin), "3.1.0");
    assert_eq!(plugin.plugins[0].version, "");
}

#[test]
fn SpongePluginEntry___effective_version___without_global___is_empty() {
    let plugin = SpongePlugin::from_json(r#"{"plugins": [{"id": "bare"}]}"#).unwrap();

    assert_eq!(plugin.plugins[0].effective_version(&plugin), "");
}
