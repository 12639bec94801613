use std::{env, path::PathBuf, process::Command};

fn main() {
    println!("cargo::rustc-check-cfg=cfg(cuda_backend)");
    println!("cargo:rerun-if-changed=src/cuda");
    println!("cargo:rerun-if-env-changed=DALTONLENS_CUDA");
    println!("cargo:rerun-if-env-changed=DALTONLENS_CUDA_ARCH");

    if env::var_os("DALTONLENS_CUDA").is_none() {
        println!("cargo:warning=Building without the CUDA transform backend (DALTONLENS_CUDA not set)");
        return;
    }

    println!("cargo:rustc-cfg=cuda_backend");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    //
    // ---- Target architecture ----
    //
    let arch = env::var("DALTONLENS_CUDA_ARCH").unwrap_or_else(|_| "87".to_string());
    let virtual_arch = format!("compute_{arch}");
    let code = format!("sm_{arch}");

    //
    // ---- Compile each .cu file into PTX ----
    //
    let kernels = ["src/cuda/kernels/pixel_transform.cu"];

    for kernel in kernels {
        let kpath = PathBuf::from(kernel);
        let name = kpath.file_stem().unwrap().to_str().unwrap();
        let ptx_file = out_dir.join(format!("{name}.ptx"));

        println!("cargo:warning=Compiling {kernel} → {name}.ptx");

        let status = Command::new("nvcc")
            .arg("-ptx")
            .arg("-o")
            .arg(&ptx_file)
            .arg(&kpath)
            .arg(format!("-arch={}", virtual_arch))
            .arg(format!("-code={}", code))
            .status()
            .expect("Failed to run nvcc");

        assert!(status.success(), "Failed to compile {kernel} to PTX");
    }
}
