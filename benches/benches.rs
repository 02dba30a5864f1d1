use criterion::*;

use pixel_swizzle as ps;
use ps::{convert, ConversionDescriptor, PixelFormat};

const WIDTH: usize = 1920;
const HEIGHT: usize = 1080;
const SAMPLE_SIZE: usize = 22;

fn swizzle(
    group: &mut BenchmarkGroup<'_, measurement::WallTime>,
    name: &str,
    src_format: PixelFormat,
    dst_format: PixelFormat,
) {
    let descriptor = ConversionDescriptor::new(src_format, dst_format);
    let pixel_count = WIDTH * HEIGHT;

    let src: Vec<u8> = (0..pixel_count * src_format.depth())
        .map(|i| (i % 255) as u8)
        .collect();
    let mut dst = vec![0u8; pixel_count * dst_format.depth()];

    group.throughput(Throughput::Elements(pixel_count as u64));
    group.bench_function(name, |b| {
        b.iter(|| {
            convert(&descriptor, black_box(&src), black_box(&mut dst))
                .expect("Benchmark iteration failed");
        });
    });
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel-swizzle");
    group.sample_size(SAMPLE_SIZE);

    swizzle(&mut group, "rgba>bgra", PixelFormat::Rgba, PixelFormat::Bgra);
    swizzle(&mut group, "rgba>abgr", PixelFormat::Rgba, PixelFormat::Abgr);
    swizzle(&mut group, "argb>rgba", PixelFormat::Argb, PixelFormat::Rgba);
    swizzle(&mut group, "rgb>bgra", PixelFormat::Rgb, PixelFormat::Bgra);
    swizzle(&mut group, "bgra>rgb", PixelFormat::Bgra, PixelFormat::Rgb);

    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
