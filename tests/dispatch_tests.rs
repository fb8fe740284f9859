/* tests/dispatch_tests.rs */

use package_actions::{
	BufferedIo, ConfigTree, HandlerError, HandlerRegistry, Operation, Package, PackageActions,
	PackageEvent,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

type Calls = Arc<Mutex<Vec<(String, String, Value)>>>;

fn extra(value: Value) -> ConfigTree {
	match value {
		Value::Object(map) => map,
		other => panic!("expected object, got {other}"),
	}
}

fn record(registry: &mut HandlerRegistry, name: &str, calls: &Calls) {
	let calls = calls.clone();
	let label = name.to_string();
	registry.register_fn(name, move |payload, package, _| {
		calls
			.lock()
			.unwrap()
			.push((label.clone(), package.name.clone(), payload.clone()));
		Ok(())
	});
}

fn recorded(calls: &Calls) -> Vec<(String, String, Value)> {
	calls.lock().unwrap().clone()
}

#[test]
fn test_end_to_end_install() {
	let calls = Calls::default();
	let mut registry = HandlerRegistry::new();
	record(&mut registry, "copy", &calls);
	let plugin = PackageActions::new(registry);

	let package = Package::new("acme/lib").with_extra(extra(json!({
		"post-package-install": { "copy": { "acme/lib": { "from": "x", "to": "y" } } }
	})));
	let project = Package::new("my/project");
	let mut io = BufferedIo::new();

	let report = plugin.on_post_package_install(&package, &project, &mut io);

	assert_eq!(
		recorded(&calls),
		[(
			"copy".to_string(),
			"acme/lib".to_string(),
			json!({ "from": "x", "to": "y" })
		)]
	);
	assert_eq!(report.invoked, ["copy"]);
	assert!(io.messages().is_empty());
}

#[test]
fn test_project_overrides_payload() {
	let calls = Calls::default();
	let mut registry = HandlerRegistry::new();
	record(&mut registry, "copy", &calls);
	let plugin = PackageActions::new(registry);

	let package = Package::new("acme/lib").with_extra(extra(json!({
		"post-package-install": { "copy": { "acme/lib": { "from": "p1" } } }
	})));
	let project = Package::new("my/project").with_extra(extra(json!({
		"post-package-install": { "copy": { "acme/lib": { "from": "p2" } } }
	})));
	let mut io = BufferedIo::new();

	plugin.on_post_package_install(&package, &project, &mut io);

	let calls = recorded(&calls);
	assert_eq!(calls.len(), 1);
	assert_eq!(calls[0].2, json!({ "from": "p2" }));
}

#[test]
fn test_project_declares_actions_for_dependency() {
	let calls = Calls::default();
	let mut registry = HandlerRegistry::new();
	record(&mut registry, "remove", &calls);
	let plugin = PackageActions::new(registry);

	let package = Package::new("acme/lib");
	let project = Package::new("my/project").with_extra(extra(json!({
		"post-package-install": { "remove": { "acme/lib": ["docs"] } }
	})));
	let mut io = BufferedIo::new();

	let report = plugin.on_post_package_install(&package, &project, &mut io);
	assert_eq!(report.invoked, ["remove"]);
	assert_eq!(recorded(&calls)[0].2, json!(["docs"]));
}

#[test]
fn test_other_packages_filtered() {
	let calls = Calls::default();
	let mut registry = HandlerRegistry::new();
	record(&mut registry, "copy", &calls);
	let plugin = PackageActions::new(registry);

	let project = Package::new("my/project").with_extra(extra(json!({
		"post-package-install": {
			"copy": { "vendor/a": { "x": 1 }, "vendor/b": { "x": 2 } }
		}
	})));
	let mut io = BufferedIo::new();

	let report = plugin.on_post_package_install(&Package::new("vendor/c"), &project, &mut io);

	assert!(recorded(&calls).is_empty());
	assert_eq!(report.skipped, ["copy"]);
	assert!(io.messages().is_empty());
}

#[test]
fn test_unknown_action_tolerated() {
	let calls = Calls::default();
	let mut registry = HandlerRegistry::new();
	record(&mut registry, "copy", &calls);
	let plugin = PackageActions::new(registry);

	let project = Package::new("my/project").with_extra(extra(json!({
		"post-package-install": {
			"frobnicate": { "acme/lib": true },
			"copy": { "acme/lib": { "x": 1 } }
		}
	})));
	let mut io = BufferedIo::new();

	let report = plugin.on_post_package_install(&Package::new("acme/lib"), &project, &mut io);

	let warnings: Vec<&str> = io.warnings().collect();
	assert_eq!(warnings.len(), 1);
	assert!(warnings[0].contains("frobnicate"));
	assert_eq!(report.unknown, ["frobnicate"]);
	assert_eq!(recorded(&calls).len(), 1);
	assert_eq!(recorded(&calls)[0].0, "copy");
}

#[test]
fn test_failure_isolation() {
	let calls = Calls::default();
	let mut registry = HandlerRegistry::new();
	registry.register_fn("a1", |_, _, _| Err(HandlerError::custom("disk on fire")));
	record(&mut registry, "a2", &calls);
	let plugin = PackageActions::new(registry);

	let project = Package::new("my/project").with_extra(extra(json!({
		"post-package-update": {
			"a1": { "acme/lib": {} },
			"a2": { "acme/lib": {} }
		}
	})));
	let mut io = BufferedIo::new();

	let report = plugin.on_post_package_update(&Package::new("acme/lib"), &project, &mut io);

	let errors: Vec<&str> = io.errors().collect();
	assert_eq!(errors.len(), 1);
	assert!(errors[0].contains("a1"));
	assert!(errors[0].contains("acme/lib"));
	assert!(errors[0].contains("disk on fire"));
	assert_eq!(recorded(&calls).len(), 1);
	assert_eq!(report.invoked, ["a2"]);
	assert!(!report.is_clean());
}

#[test]
fn test_legacy_key_only() {
	let calls = Calls::default();
	let mut registry = HandlerRegistry::new();
	record(&mut registry, "copy", &calls);
	let plugin = PackageActions::new(registry);

	let package = Package::new("acme/lib").with_extra(extra(json!({
		"file-management": { "copy": { "acme/lib": {} } }
	})));
	let mut io = BufferedIo::new();

	let install = plugin.on_post_package_install(&package, &Package::default(), &mut io);
	assert!(install.has_actions);
	assert_eq!(install.attempted().count(), 0);

	let update = plugin.on_post_package_update(&package, &Package::default(), &mut io);
	assert!(!update.has_actions);

	assert!(recorded(&calls).is_empty());
}

#[test]
fn test_update_event_uses_target_and_namespace() {
	let calls = Calls::default();
	let mut registry = HandlerRegistry::new();
	record(&mut registry, "copy", &calls);
	let plugin = PackageActions::new(registry);

	let initial = Package::new("acme/lib").with_extra(extra(json!({
		"post-package-update": { "copy": { "acme/lib": "old" } }
	})));
	let target = Package::new("acme/lib").with_extra(extra(json!({
		"post-package-install": { "copy": { "acme/lib": "install" } },
		"post-package-update": { "copy": { "acme/lib": "new" } }
	})));
	let event = PackageEvent {
		operation: Operation::Update { initial, target },
		project: Package::new("my/project"),
	};
	let mut io = BufferedIo::new();

	plugin.handle(&event, &mut io);

	let calls = recorded(&calls);
	assert_eq!(calls.len(), 1);
	assert_eq!(calls[0].2, json!("new"));
}
