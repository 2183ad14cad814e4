use axisjoy::backends::virtual_input::VirtualPlatform;
use axisjoy::{Joystick, JoystickConfig, Level, Pin};

fn main() -> axisjoy::Result<()> {
    let board = VirtualPlatform::new();

    let config = JoystickConfig::from_toml_str(
        r#"
        [pins]
        sw = 2
        vrx = 14
        vry = 15
        "#,
    )?;
    let mut stick = config.build(board.clone());

    let rotated_cfg = JoystickConfig {
        orientation: axisjoy::Orientation::SwapXy,
        ..config
    };
    let mut rotated = rotated_cfg.build(board.clone());

    // Scripted input: (button, vrx, vry)
    let frames = [
        (Level::High, 512, 512),
        (Level::High, 900, 512),
        (Level::High, 900, 512),
        (Level::High, 512, 100),
        (Level::Low, 512, 100),
        (Level::High, 512, 512),
    ];

    for (i, (sw, vrx, vry)) in frames.into_iter().enumerate() {
        board.set_digital(Pin(2), sw);
        board.set_analog(Pin(14), vrx);
        board.set_analog(Pin(15), vry);

        println!(
            "frame {i}: multiple={} single={} rotated={}",
            stick.multiple_read(),
            stick.single_read(),
            rotated.multiple_read(),
        );
    }

    Ok(())
}
