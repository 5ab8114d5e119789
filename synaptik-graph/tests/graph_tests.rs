//! End-to-end scenarios for the knowledge graph engine: creation,
//! activation spread, stats, and maintenance over a real worker pool.

#![allow(clippy::expect_used)]

use synaptik_graph::{KnowledgeGraph, RelationKind, TextIngestor};

fn graph() -> KnowledgeGraph {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    KnowledgeGraph::init(4, 500).expect("valid config")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn empty_query_returns_none() {
    let graph = graph();
    assert_eq!(graph.query("nonexistent").await, None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn create_then_find() {
    let graph = graph();
    let id = graph.create_concept("book").await.expect("create");
    assert_eq!(graph.find_concept("book"), Some(id));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn double_create_yields_one_concept() {
    let graph = graph();
    let a = graph.create_concept("x").await.expect("create");
    let b = graph.create_concept("x").await.expect("create");
    assert_eq!(a, b);
    assert_eq!(graph.concept_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn propagation_reaches_neighbour() {
    let graph = graph();
    let a = graph.create_concept("a").await.expect("create");
    let b = graph.create_concept("b").await.expect("create");

    graph
        .add_relation(a, b, RelationKind::AssociatedWith, 1.0)
        .await;
    graph.wait_all().await;

    for _ in 0..4 {
        graph.activate_concept(a).await;
    }
    graph.wait_all().await;

    let stats = graph.get_stats(b).expect("stats for b");
    assert!(stats.activation > 0.0, "b never received activation");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn propagation_does_not_chain_through_cycles() {
    // a → b → c → a with full weights. Spread activation must not echo
    // around the cycle: a burst on a settles instead of amplifying.
    let graph = graph();
    let a = graph.create_concept("a").await.expect("create");
    let b = graph.create_concept("b").await.expect("create");
    let c = graph.create_concept("c").await.expect("create");

    graph.add_relation(a, b, RelationKind::Causes, 1.0).await;
    graph.add_relation(b, c, RelationKind::Causes, 1.0).await;
    graph.add_relation(c, a, RelationKind::Causes, 1.0).await;
    graph.wait_all().await;

    for _ in 0..10 {
        graph.activate_concept(a).await;
    }
    // Terminates: injected activation never re-propagates.
    graph.wait_all().await;

    for id in [a, b, c] {
        let stats = graph.get_stats(id).expect("stats");
        assert!(stats.activation <= 2.1, "activation escaped its bounds");
    }
    assert!(graph.get_stats(b).expect("stats").activation > 0.0);
    // c only hears from b when b is *directly* activated, which never
    // happened here; injected activation does not chain.
    assert_eq!(graph.get_stats(c).expect("stats").activation, 0.0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn query_activates_existing_concept() {
    let graph = graph();
    let id = graph.create_concept("lantern").await.expect("create");
    graph.wait_all().await;
    let before = graph.get_stats(id).expect("stats").activation;

    assert_eq!(graph.query("lantern").await, Some(id));
    graph.wait_all().await;

    let after = graph.get_stats(id).expect("stats").activation;
    assert!(after >= before - 0.001);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn relation_upsert_keeps_max_weight() {
    let graph = graph();
    let src = graph.create_concept("src").await.expect("create");
    let tgt = graph.create_concept("tgt").await.expect("create");

    graph.add_relation(src, tgt, RelationKind::IsA, 0.3).await;
    graph.add_relation(src, tgt, RelationKind::IsA, 0.7).await;
    graph.wait_all().await;

    let stats = graph.get_stats(src).expect("stats");
    assert_eq!(stats.relation_count, 1);
    // complexity = mean weight over one relation = that relation's weight
    assert!((stats.complexity - 0.7).abs() < 1e-9);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn invariants_hold_under_load() {
    let graph = graph();
    let mut ids = Vec::new();
    for term in ["sun", "moon", "star", "sky", "cloud", "rain"] {
        ids.push(graph.create_concept(term).await.expect("create"));
    }
    for (i, &src) in ids.iter().enumerate() {
        for &tgt in &ids[i + 1..] {
            graph
                .add_relation(src, tgt, RelationKind::AssociatedWith, 0.9)
                .await;
        }
    }
    graph.wait_all().await;

    for round in 0..20 {
        graph.activate_concept(ids[round % ids.len()]).await;
    }
    graph.run_consolidation().await;
    graph.wait_all().await;

    for &id in &ids {
        let stats = graph.get_stats(id).expect("stats");
        assert!(stats.activation >= 0.0 && stats.activation <= 2.1);
        assert!(stats.energy >= 0.0 && stats.energy <= 2.0);
        assert!(stats.stability >= 0.0 && stats.stability <= 1.0);
        assert!(stats.complexity >= 0.0 && stats.complexity <= 1.0);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn decay_is_monotonic() {
    let graph = graph();
    let id = graph.create_concept("fading").await.expect("create");
    graph.send_activation(id, 1.5).await;
    graph.wait_all().await;

    let before = graph.get_stats(id).expect("stats");
    graph.run_maintenance().await;
    graph.wait_all().await;
    let after = graph.get_stats(id).expect("stats");

    assert!(after.activation <= before.activation);
    assert!(after.energy <= before.energy);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn maintenance_after_ingest_preserves_concepts() {
    let graph = graph();
    let ingestor = TextIngestor::new(&graph);

    // Roughly a kilobyte of text.
    let document = "The forest breathes slowly under morning light. \
        Tall pines guard the silent river while fog drifts between their \
        branches. A heron is a patient hunter. The heron watches the water \
        and waits for careless fish. Hunger causes patience in wild \
        creatures. Roots are part of the forest floor, binding soil \
        against the spring floods. When rain falls, the river swells and \
        carries broken branches toward the valley. Seasons turn without \
        hurry here. Winter causes silence, and silence is a kind of rest. \
        Foxes cross the frozen shallows at dusk, leaving neat tracks that \
        vanish with the next snowfall. By summer the meadow hums with \
        insects and the pines drop their cones onto soft needles. Every \
        creature keeps its own small territory, yet the forest binds them \
        into one slow conversation of growth and decay.";

    let report = ingestor.ingest(document).await.expect("ingest");
    graph.wait_all().await;
    assert!(report.concepts_touched > 20);

    let before = graph.concept_count();
    graph.run_maintenance().await;
    graph.wait_all().await;

    // Nothing is old enough to die yet.
    assert_eq!(graph.concept_count(), before);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn wait_all_leaves_no_pending_messages() {
    let graph = graph();
    let mut ids = Vec::new();
    for term in ["north", "south", "east", "west"] {
        ids.push(graph.create_concept(term).await.expect("create"));
    }
    for &src in &ids {
        for &tgt in &ids {
            if src != tgt {
                graph
                    .add_relation(src, tgt, RelationKind::AssociatedWith, 1.0)
                    .await;
            }
        }
    }
    for &id in &ids {
        for _ in 0..5 {
            graph.activate_concept(id).await;
        }
    }
    graph.wait_all().await;

    // Settled: a second wait returns immediately and stats are stable
    // across reads.
    graph.wait_all().await;
    for &id in &ids {
        let first = graph.get_stats(id).expect("stats");
        let second = graph.get_stats(id).expect("stats");
        assert_eq!(first.activation, second.activation);
        assert_eq!(first.access_count, second.access_count);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shutdown_is_clean() {
    let graph = graph();
    for term in ["one", "two", "three"] {
        graph.create_concept(term).await.expect("create");
    }
    graph.wait_all().await;

    graph.shutdown().await.expect("first shutdown succeeds");
    assert!(graph.shutdown().await.is_err());
    assert!(graph.create_concept("late").await.is_err());
}
