use criterion::{black_box, criterion_group, criterion_main, Criterion};

use examinst_core::engine::materialize_instance;
use examinst_core::model::{Answer, Caller, Examination, Question};
use examinst_core::seed::derive_seed;

fn make_exam(pool: usize, question_count: usize, answers: usize, answer_count: usize) -> Examination {
    Examination {
        id: "bench".into(),
        name: "Bench".into(),
        duration_minutes: 60,
        question_count,
        questions: (0..pool)
            .map(|i| Question {
                id: format!("q{i}"),
                question: format!("Question {i}"),
                answer_count,
                answers: (0..answers)
                    .map(|j| Answer {
                        id: format!("q{i}a{j}"),
                        answer: format!("Answer {j}"),
                        correct: j == 0,
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn bench_derive_seed(c: &mut Criterion) {
    c.bench_function("derive_seed", |b| {
        b.iter(|| derive_seed(black_box("tok1"), black_box("exa1"), black_box("stu1")))
    });
}

fn bench_materialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("materialize_instance");
    let examinee = Caller::examinee("stu1");
    let privileged = Caller::privileged("adm1");

    group.bench_function("10 of 10, 4 of 4", |b| {
        let exam = make_exam(10, 10, 4, 4);
        b.iter(|| materialize_instance(black_box(&exam), "tok1", black_box(&examinee)))
    });

    group.bench_function("50 of 200, 4 of 8", |b| {
        let exam = make_exam(200, 50, 8, 4);
        b.iter(|| materialize_instance(black_box(&exam), "tok1", black_box(&examinee)))
    });

    group.bench_function("privileged 200", |b| {
        let exam = make_exam(200, 50, 8, 4);
        b.iter(|| materialize_instance(black_box(&exam), "tok1", black_box(&privileged)))
    });

    group.finish();
}

criterion_group!(benches, bench_derive_seed, bench_materialize);
criterion_main!(benches);
