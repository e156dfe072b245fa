use rand::{seq::SliceRandom, thread_rng};
use rb_tree::RbTree;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let mut rng = thread_rng();
    let mut keys: Vec<u32> = (1..=100).collect();
    keys.shuffle(&mut rng);
    keys.truncate(10);
    println!("{keys:?}");

    let mut tree = RbTree::new();
    for &k in &keys {
        tree.insert(k).unwrap();
    }
    println!(
        "len {} height {} black height {}",
        tree.len(),
        tree.height(),
        tree.black_height()
    );

    keys.shuffle(&mut rng);
    for k in keys {
        let handle = tree.search(&k).unwrap();
        tree.delete(handle).unwrap();
        println!("deleted {k}: {:?}", tree.iter().collect::<Vec<_>>());
    }
    assert!(tree.is_empty());
}
