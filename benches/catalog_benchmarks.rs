use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use security_provider::random::resolve_device_path_from;
use security_provider::{
    NativeLibraryStatus, NativeRngStatus, NoNativeLibrary, ProviderRegistry, RegistrySettings, ServiceType,
};

fn settings() -> RegistrySettings {
    RegistrySettings::default().with_platform("Linux")
}

fn benchmark_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialize");

    group.bench_function("native", |b| {
        b.iter(|| {
            black_box(ProviderRegistry::initialize(
                settings(),
                &NativeLibraryStatus::loaded(),
                &NativeRngStatus::available(),
            ));
        });
    });

    group.bench_function("portable", |b| {
        b.iter(|| {
            black_box(ProviderRegistry::initialize(
                settings(),
                &NoNativeLibrary,
                &NativeRngStatus::unavailable(),
            ));
        });
    });

    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    let registry =
        ProviderRegistry::initialize(settings(), &NativeLibraryStatus::loaded(), &NativeRngStatus::available());
    let mut group = c.benchmark_group("lookup");

    for (service_type, name) in [
        (ServiceType::MessageDigest, "SHA-256"),
        (ServiceType::MessageDigest, "OID.2.16.840.1.101.3.4.2.1"),
        (ServiceType::Signature, "sha1withdsa"),
        (ServiceType::KeyStore, "missing"),
    ] {
        group.bench_with_input(BenchmarkId::new(service_type.name(), name), &name, |b, name| {
            b.iter(|| black_box(registry.lookup(service_type, name)));
        });
    }

    group.finish();
}

fn benchmark_device_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("device_path");
    let cwd = std::path::Path::new("/work");

    for uri in ["file:/dev/urandom", "file:dev/random", "file:///dev/random?x", "not a uri"] {
        group.bench_with_input(BenchmarkId::from_parameter(uri), &uri, |b, uri| {
            b.iter(|| black_box(resolve_device_path_from(uri, cwd)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_initialize, benchmark_lookup, benchmark_device_resolution);
criterion_main!(benches);
