use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use softmax_xent::loss::{predict, softmax_loss, softmax_loss_batched, softmax_loss_naive};
use softmax_xent::strategy::{Strategy, set_strategy};
use softmax_xent::tensors::Tensor;
use std::hint::black_box;
use std::time::Instant;

const TRAIN: usize = 256;
const DIM: usize = 64;
const CLASSES: usize = 10;
const REG: f64 = 1e-3;

fn main() {
    let mut rng = StdRng::seed_from_u64(7);

    // noisy blobs: every class boosts its own slice of the feature vector
    let mut labels = Vec::with_capacity(TRAIN);
    let mut features = Vec::with_capacity(TRAIN * DIM);
    for _ in 0..TRAIN {
        let label = rng.random_range(0..CLASSES);
        labels.push(label);
        for d in 0..DIM {
            let shift = if d % CLASSES == label { 1.5 } else { 0.0 };
            features.push(rng.random_range(-1.0..1.0) + shift);
        }
    }
    let x = Tensor::new(vec![TRAIN, DIM], features);

    let init: Vec<f64> = (0..DIM * CLASSES)
        .map(|_| rng.random_range(-0.01..0.01))
        .collect();
    let mut w = Tensor::new(vec![DIM, CLASSES], init);

    println!("Comparing kernels...");

    let start = Instant::now();
    let (naive_loss, naive_grad) =
        black_box(softmax_loss_naive(&w, &x, &labels, REG)).unwrap();
    let naive_time = start.elapsed();

    let start = Instant::now();
    let (batched_loss, batched_grad) =
        black_box(softmax_loss_batched(&w, &x, &labels, REG)).unwrap();
    let batched_time = start.elapsed();

    let max_diff = naive_grad
        .data
        .iter()
        .zip(&batched_grad.data)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0_f64, f64::max);

    println!("naive:   loss={:.6} in {:?}", naive_loss, naive_time);
    println!("batched: loss={:.6} in {:?}", batched_loss, batched_time);
    println!("max gradient disagreement: {:.3e}", max_diff);

    println!("Descending for 50 steps...");

    set_strategy(Strategy::Batched);

    let lr = 0.5;
    for step in 0..50 {
        let (loss, grad) = softmax_loss(&w, &x, &labels, REG).unwrap();

        for (wv, gv) in w.data.iter_mut().zip(&grad.data) {
            *wv -= lr * gv;
        }

        if step % 10 == 0 {
            println!("step {:>2}: loss={:.6}", step, loss);
        }
    }

    let picks = predict(&w, &x).unwrap();
    let hits = picks.iter().zip(&labels).filter(|(p, l)| p == l).count();

    println!(
        "train accuracy: {:.1}%",
        100.0 * hits as f64 / TRAIN as f64
    );
}
