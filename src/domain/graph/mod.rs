pub mod local_graph;
