use widest_path::{BinaryLifting, BottleneckSolver, Edge, HeavyLight};

fn query(t: &impl BottleneckSolver, x: usize, y: usize) {
    match t.query(x, y) {
        Ok(answer) => println!("Widest path from {} to {}: {}", x, y, answer),
        Err(e) => println!("Cannot query {} to {}: {}", x, y, e),
    }
}

fn run<T: BottleneckSolver>(name: &str, n: usize, edges: &[Edge]) {
    println!("== {name}");
    let t = match T::build(n, edges) {
        Ok(t) => t,
        Err(e) => {
            println!("Cannot build: {e}");
            return;
        }
    };
    query(&t, 1, 3);
    query(&t, 1, 4);
    query(&t, 2, 2);
    query(&t, 1, 5);
}

fn main() {
    let edges: Vec<Edge> = [(1, 2, 4), (2, 3, 3), (3, 1, 1)]
        .into_iter()
        .map(|(u, v, w)| Edge::new(u, v, w))
        .collect();
    println!("Created a triangle on nodes 1 to 3 with weights 4, 3, 1, and a lone node 4");
    run::<BinaryLifting>("binary lifting", 4, &edges);
    run::<HeavyLight>("heavy-light", 4, &edges);
}
