use anyhow::Result;
use lineage_core::{AncestryResolver, LineageError, Subject, SubjectGate};
use lineage_graph::LineageGraph;

fn aviary() -> Result<LineageGraph> {
    let mut graph = LineageGraph::new();
    let kestrel = graph.add_node("kestrel")?;
    let plover = graph.add_node("plover")?;
    let heron = graph.add_node("heron")?;
    let osprey = graph.add_node("osprey")?;
    let wren = graph.add_node("wren")?;

    graph.link_parent(kestrel, heron)?;
    graph.link_parent(plover, heron)?;
    graph.link_parent(heron, osprey)?;
    graph.link_parent(wren, osprey)?;
    Ok(graph)
}

#[test]
fn classify_then_resolve_through_the_graph() -> Result<()> {
    let graph = aviary()?;
    let resolver = AncestryResolver::new(&graph);

    let kestrel = graph.classify(&Some("kestrel"));
    let plover = graph.classify(&Some("plover"));
    let wren = graph.classify(&Some("wren"));

    let shared = resolver.nearest_common_ancestor(&kestrel, &plover)?;
    assert_eq!(shared.and_then(|idx| graph.name_of(idx)), Some("heron"));

    let shared = resolver.nearest_common_ancestor(&kestrel, &wren)?;
    assert_eq!(shared.and_then(|idx| graph.name_of(idx)), Some("osprey"));

    let osprey = graph.find("osprey").unwrap();
    assert!(resolver.is_ancestor_of(&osprey, &kestrel)?);

    Ok(())
}

#[test]
fn host_markers_map_onto_the_subject_taxonomy() -> Result<()> {
    let graph = aviary()?;
    let resolver = AncestryResolver::new(&graph);

    // The host's "no value" marker is a caller error.
    let err = resolver
        .chain_of(&graph.classify(&Some("dodo")))
        .unwrap_err();
    assert_eq!(err, LineageError::UnclassifiableSubject);

    // The host's "no ancestor" marker is a valid empty subject.
    let terminal = graph.classify(&None);
    assert!(resolver.chain_of(&terminal)?.is_empty());
    assert_eq!(
        resolver.nearest_common_ancestor(&terminal, &graph.classify(&Some("kestrel")))?,
        None
    );

    Ok(())
}

#[test]
fn mutual_parents_are_caught_by_the_walker() -> Result<()> {
    // Each node has a single parent, yet the chain never terminates; the
    // graph cannot reject this shape at construction time.
    let mut graph = LineageGraph::new();
    let a = graph.add_node("a")?;
    let b = graph.add_node("b")?;
    graph.link_parent(a, b)?;
    graph.link_parent(b, a)?;

    let resolver = AncestryResolver::new(&graph);
    let err = resolver.chain_of(&Subject::Valued(a)).unwrap_err();
    assert_eq!(err, LineageError::CyclicAncestry(1));

    Ok(())
}
