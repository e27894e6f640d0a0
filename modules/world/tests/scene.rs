extern crate arbor_world;
extern crate env_logger;

use arbor_world::prelude::*;

#[test]
fn find() {
    let mut scene = Scene::new();

    let e1 = scene.create("room.obj");
    let e2 = scene.create("floor");
    let e3 = scene.create("tallBox");
    let e4 = scene.create("shortBox");

    let graph = scene.graph_mut();
    graph.attach(e1, vec![e2, e3]).unwrap();
    graph.attach(e3, Some(e4)).unwrap();

    assert_eq!(scene.find("room.obj"), Some(e1));
    assert_eq!(scene.find("room.obj/"), Some(e1));
    assert_eq!(scene.find("room.obj//"), Some(e1));
    assert_eq!(scene.find("/room.obj"), Some(e1));
    assert_eq!(scene.find("//room.obj"), Some(e1));
    assert_eq!(scene.find("/room.obj//"), Some(e1));

    assert_eq!(scene.find("room.obj/floor"), Some(e2));
    assert_eq!(scene.find("room.obj/tallBox"), Some(e3));
    assert_eq!(scene.find("room.obj/tallBox/shortBox"), Some(e4));

    assert_eq!(scene.find("room.obj/blahblah"), None);
    assert_eq!(scene.find("floor"), None);
    assert_eq!(scene.find(""), None);

    assert_eq!(scene.find_from(e3, "shortBox"), Some(e4));
    assert_eq!(scene.find_from(e3, ""), Some(e3));
    assert_eq!(scene.find_from(e3, "floor"), None);

    scene.set_name(e3, "crate");
    assert_eq!(scene.name(e3), Some("crate"));
    assert_eq!(scene.find("room.obj/tallBox"), None);
    assert_eq!(scene.find("room.obj/crate/shortBox"), Some(e4));
}

#[test]
fn destroy_cascades() {
    let _ = env_logger::try_init();

    let mut scene = Scene::new();
    let e1 = scene.create("e1");
    let e2 = scene.create("e2");
    let e3 = scene.create("e3");
    let e4 = scene.create("e4");
    let e5 = scene.create("e5");
    let e6 = scene.create("e6");

    let graph = scene.graph_mut();
    graph.attach(e1, vec![e2, e3]).unwrap();
    graph.attach(e3, vec![e4, e5]).unwrap();
    graph.attach(e5, Some(e6)).unwrap();
    // e1 <- (e2, e3 <- (e4, e5 <- e6))

    assert_eq!(scene.len(), 6);

    let deletions = scene.destroy(e3).unwrap();
    assert_eq!(deletions[0], e3);
    assert_eq!(deletions.len(), 4);

    assert!(scene.contains(e1));
    assert!(scene.contains(e2));
    assert!(!scene.contains(e3));
    assert!(!scene.contains(e4));
    assert!(!scene.contains(e5));
    assert!(!scene.contains(e6));
    assert_eq!(scene.len(), 2);

    assert_eq!(scene.name(e4), None);
    assert_eq!(scene.graph().children(e1).collect::<Vec<_>>(), [e2]);
    assert_eq!(scene.destroy(e3), Err(Error::NodeNotFound(e3)));
}

#[test]
fn destroy_orphans_the_rest() {
    let mut scene = Scene::new();
    let e1 = scene.create("e1");
    let polygon = scene.create_with("polygon", Capabilities::SHAPE);
    let keeper = scene.create_with("keeper", Capabilities::PERSISTENT);
    let e2 = scene.create("e2");

    let graph = scene.graph_mut();
    graph.attach(e1, vec![polygon, keeper]).unwrap();
    graph.attach(keeper, Some(e2)).unwrap();

    assert_eq!(scene.destroy(e1).unwrap(), [e1]);

    assert!(scene.contains(polygon));
    assert!(scene.contains(keeper));
    assert!(scene.contains(e2));
    assert!(scene.graph().is_root(polygon));
    assert!(scene.graph().is_root(keeper));
    assert_eq!(scene.graph().parent(e2), Some(keeper));

    assert_eq!(scene.destroy(keeper), Err(Error::NotDestroyable(keeper)));
    assert_eq!(scene.destroy(polygon), Err(Error::NotDestroyable(polygon)));

    // The owner could still get rid of them.
    assert_eq!(scene.delete(keeper), Some(vec![keeper, e2]));
    assert_eq!(scene.delete(keeper), None);
    assert_eq!(scene.len(), 1);
}

#[test]
fn strip() {
    let mut scene = Scene::new();
    let e1 = scene.create("e1");
    let e2 = scene.create("e2");
    let e3 = scene.create("e3");

    let graph = scene.graph_mut();
    graph.attach(e1, Some(e2)).unwrap();
    graph.attach(e2, Some(e3)).unwrap();

    assert!(scene.strip(e2));
    assert!(!scene.strip(e2));

    // The entity is still alive, but no longer part of the hierarchy.
    assert!(scene.contains(e2));
    assert_eq!(scene.name(e2), Some("e2"));
    assert!(!scene.graph().contains(e2));
    assert!(scene.graph().is_leaf(e1));
    assert!(scene.graph().is_root(e3));

    // And could join again.
    scene.rejoin(e2, Capabilities::ENTITY).unwrap();
    assert!(scene.graph().is_root(e2));
    scene.graph_mut().attach(e1, Some(e2)).unwrap();
    assert_eq!(scene.find("e1/e2"), Some(e2));

    assert_eq!(scene.destroy(e1).unwrap(), [e1, e2]);
    assert_eq!(scene.len(), 1);
}

#[test]
fn rejoin_twice() {
    let mut scene = Scene::new();
    let e1 = scene.create("e1");
    let e2 = scene.create("e2");
    scene.graph_mut().attach(e1, Some(e2)).unwrap();

    // Still part of the hierarchy, the node is left as is.
    assert_eq!(
        scene.rejoin(e2, Capabilities::SHAPE),
        Err(Error::NodeExists(e2))
    );
    assert_eq!(
        scene.graph_mut().add(e2, Capabilities::SHAPE),
        Err(Error::NodeExists(e2))
    );
    assert_eq!(scene.graph().parent(e2), Some(e1));
    assert_eq!(scene.graph().capabilities(e2), Some(Capabilities::ENTITY));

    scene.destroy(e2).unwrap();
    assert_eq!(
        scene.rejoin(e2, Capabilities::ENTITY),
        Err(Error::NodeNotFound(e2))
    );
    assert!(!scene.graph().contains(e2));
}

#[test]
fn with_capacity() {
    let settings = Settings {
        capacity: 64,
        ..Settings::default()
    };

    let mut scene = Scene::with_settings(settings);
    assert!(scene.is_empty());

    let e1 = scene.create("e1");
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.graph().len(), 1);
    assert_eq!(scene.find("e1"), Some(e1));
}

#[test]
fn handles_are_not_reused_blindly() {
    let mut scene = Scene::new();
    let e1 = scene.create("e1");
    scene.destroy(e1).unwrap();

    let e2 = scene.create("e2");
    assert!(!scene.contains(e1));
    assert!(scene.contains(e2));
    assert!(!scene.graph().contains(e1));
    assert_eq!(scene.name(e1), None);
    assert_eq!(scene.name(e2), Some("e2"));
}

#[test]
fn settings_from_json() {
    let settings = Settings::from_json(r#"{ "depth_policy": "restart" }"#).unwrap();
    let scene = Scene::with_settings(settings);
    assert_eq!(scene.graph().settings().depth_policy, DepthPolicy::Restart);
    assert!(!scene.graph().settings().revisit_on_recurse);
}
