mod common;

use actorpath::{ActorGraph, ActorId, PathResult, SearchError, search};
use common::{FAMILY, family_graph, labels};

#[tokio::test]
async fn test_family_search_direct() {
    let graph = family_graph().await;

    let mut expected = PathResult::new("Maxim", "Kostya");
    expected.add_connection("Maxim", "Kostya", ["Sumy"]);

    let actual = search(&graph, "Maxim", "Kostya").unwrap();
    assert_eq!(actual, expected);
    assert_eq!(actual.distance(), Some(1));
}

#[tokio::test]
async fn test_family_search_two_hops() {
    let graph = family_graph().await;

    let mut expected = PathResult::new("Maxim", "Elena");
    expected
        .add_connection("Maxim", "Kostya", ["Sumy"])
        .add_connection("Kostya", "Elena", ["Moscow"]);

    assert_eq!(search(&graph, "Maxim", "Elena").unwrap(), expected);
}

#[tokio::test]
async fn test_family_search_prunes_dead_ends() {
    let graph = family_graph().await;

    let mut expected = PathResult::new("Maxim", "Irina");
    expected
        .add_connection("Maxim", "Kostya", ["Sumy"])
        .add_connection("Kostya", "Elena", ["Moscow"])
        .add_connection("Kostya", "Svetlana", ["Moscow"])
        .add_connection("Elena", "Irina", ["New York"])
        .add_connection("Svetlana", "Irina", ["New York"]);

    let actual = search(&graph, "Maxim", "Irina").unwrap();
    assert_eq!(actual, expected);
    assert_eq!(actual.distance(), Some(3));
    assert_eq!(actual.path_count(), 2);
    // Lilia sits at the same distance as Elena and Svetlana but never reaches Irina.
    assert!(!actual.actors().iter().any(|actor| actor.as_str() == "Lilia"));
}

#[tokio::test]
async fn test_family_search_merged_labels() {
    let graph = family_graph().await;

    let mut expected = PathResult::new("Lilia", "Irina");
    expected
        .add_connection("Lilia", "Elena", ["Moscow", "Budapest"])
        .add_connection("Lilia", "Svetlana", ["Moscow"])
        .add_connection("Elena", "Irina", ["New York"])
        .add_connection("Svetlana", "Irina", ["New York"]);

    let actual = search(&graph, "Lilia", "Irina").unwrap();
    assert_eq!(actual, expected);
    assert_eq!(actual.connections()[0].productions, labels(&["Budapest", "Moscow"]));
}

#[tokio::test]
async fn test_search_same_actor() {
    let graph = family_graph().await;

    for actor in FAMILY {
        let result = search(&graph, actor, actor).unwrap();
        assert!(result.connections().is_empty());
        assert!(result.is_found());
        assert_eq!(result.distance(), Some(0));
    }
}

#[tokio::test]
async fn test_search_is_deterministic() {
    let graph = family_graph().await;
    let other_graph = family_graph().await;

    for start in FAMILY {
        for end in FAMILY {
            let first = search(&graph, start, end).unwrap();
            assert_eq!(first, search(&graph, start, end).unwrap());
            assert_eq!(first, search(&other_graph, start, end).unwrap());
        }
    }
}

#[tokio::test]
async fn test_connection_labels_match_graph_edges() {
    let graph = family_graph().await;

    for start in FAMILY {
        for end in FAMILY {
            for connection in search(&graph, start, end).unwrap().connections() {
                assert_eq!(
                    graph.get_edge(&connection.from, &connection.to),
                    Some(&connection.productions)
                );
            }
        }
    }
}

#[test]
fn test_search_reverse_direction_orders_by_layer() {
    let graph: ActorGraph = [
        ("a", "b", "p1"),
        ("a", "c", "p2"),
        ("b", "d", "p3"),
        ("c", "d", "p4"),
        ("d", "e", "p5"),
    ]
    .into_iter()
    .collect();

    let mut expected = PathResult::new("e", "a");
    expected
        .add_connection("e", "d", ["p5"])
        .add_connection("d", "b", ["p3"])
        .add_connection("d", "c", ["p4"])
        .add_connection("b", "a", ["p1"])
        .add_connection("c", "a", ["p2"]);

    assert_eq!(search(&graph, "e", "a").unwrap(), expected);
}

#[test]
fn test_search_without_path_returns_sentinel() {
    let mut graph: ActorGraph = [("Maxim", "Kostya", "Sumy")].into_iter().collect();
    graph.add_actor("Olga");

    let result = search(&graph, "Maxim", "Olga").unwrap();

    assert_eq!(result, PathResult::not_found("Maxim", "Olga"));
    assert!(!result.is_found());
    assert_eq!(result.distance(), None);
    assert!(result.connections().is_empty());
}

#[test]
fn test_search_unknown_actor() {
    let graph: ActorGraph = [("Maxim", "Kostya", "Sumy")].into_iter().collect();

    assert_eq!(
        search(&graph, "Nobody", "Maxim"),
        Err(SearchError::UnknownActor(ActorId::from("Nobody")))
    );
    assert_eq!(
        search(&graph, "Maxim", "Nobody"),
        Err(SearchError::UnknownActor(ActorId::from("Nobody")))
    );
    assert_eq!(
        search(&graph, "Ghost", "Nobody"),
        Err(SearchError::UnknownActor(ActorId::from("Ghost")))
    );
}
