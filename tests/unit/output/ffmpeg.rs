use super::*;

fn sequence() -> FrameSequence {
    FrameSequence {
        dir: PathBuf::from("anim"),
        basename: "spin".to_string(),
        extension: "png".to_string(),
        first_number: 100,
        count: 12,
    }
}

#[test]
fn args_reference_numbered_input_pattern() {
    let asm = FfmpegAssembler::new(FfmpegAssemblerOpts {
        out_dir: PathBuf::from("out"),
        format: "gif".to_string(),
        fps: 24,
        overwrite: true,
    });
    let args = asm.ffmpeg_args(&sequence());

    let pos = |flag: &str| args.iter().position(|a| a == flag).unwrap();
    assert_eq!(args[0], "-y");
    assert_eq!(args[pos("-framerate") + 1], "24");
    assert_eq!(args[pos("-start_number") + 1], "100");
    assert_eq!(
        args[pos("-i") + 1],
        PathBuf::from("anim")
            .join("spin%d.png")
            .to_string_lossy()
            .into_owned()
    );
    assert_eq!(args[pos("-frames:v") + 1], "12");
    assert_eq!(
        args.last().unwrap(),
        &PathBuf::from("out")
            .join("spin.gif")
            .to_string_lossy()
            .into_owned()
    );
}

#[test]
fn no_overwrite_uses_dash_n() {
    let asm = FfmpegAssembler::new(FfmpegAssemblerOpts {
        overwrite: false,
        ..FfmpegAssemblerOpts::default()
    });
    assert_eq!(asm.ffmpeg_args(&sequence())[0], "-n");
}

#[test]
fn zero_fps_and_empty_sequences_are_rejected() {
    let mut asm = FfmpegAssembler::new(FfmpegAssemblerOpts {
        fps: 0,
        ..FfmpegAssemblerOpts::default()
    });
    assert!(matches!(
        asm.assemble(&sequence()),
        Err(LoomError::Validation(_))
    ));

    let mut asm = FfmpegAssembler::default();
    let empty = FrameSequence {
        count: 0,
        ..sequence()
    };
    assert!(matches!(asm.assemble(&empty), Err(LoomError::Validation(_))));
}
