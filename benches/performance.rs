use criterion::{black_box, criterion_group, criterion_main, Criterion};
use depmap::core::{DependencyAnalyzer, MapOptions};

fn benchmark_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("dependency_mapping");

    let test_dir = std::env::temp_dir().join("depmap_bench");
    std::fs::create_dir_all(&test_dir).unwrap();

    // Python files forming a chain with stdlib and third-party imports
    for i in 0..20 {
        let content = format!(
            r#"
import os
import json
import requests
from .module_{} import helper

def run():
    return helper(os.getcwd())
"#,
            (i + 1) % 20
        );
        std::fs::write(test_dir.join(format!("module_{}.py", i)), content).unwrap();
    }

    // JavaScript files with mixed import forms
    for i in 0..20 {
        let content = format!(
            r#"
import express from 'express';
import {{ helper }} from './util_{}';
const fs = require('fs');

export function run() {{
    return helper(fs.readdirSync('.'));
}}
"#,
            (i + 1) % 20
        );
        std::fs::write(test_dir.join(format!("util_{}.js", i)), content).unwrap();
    }

    group.bench_function("analyze_mixed_tree", |b| {
        let analyzer = DependencyAnalyzer::new();
        let options = MapOptions::default();
        b.iter(|| {
            let report = analyzer.analyze(black_box(&test_dir), &options);
            black_box(report.total_dependencies)
        });
    });

    group.finish();

    let _ = std::fs::remove_dir_all(&test_dir);
}

criterion_group!(benches, benchmark_analysis);
criterion_main!(benches);
