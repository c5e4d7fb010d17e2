use soft_asset_loader::prelude::*;
use soft_asset_loader::ManualStreamingManager;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug)]
#[allow(dead_code)]
struct Widget {
    title: String,
}

impl Asset for Widget {}

struct Hud;

impl Hud {
    fn on_widget_loaded(&self, widget: Option<ObjectPtr<Widget>>) {
        match widget.and_then(|w| w.get()) {
            Some(widget) => println!("HUD received {widget:?}"),
            None => println!("HUD widget failed to load"),
        }
    }
}

fn main() {
    println!("Soft Reference Loading Example");

    let manager = Arc::new(ManualStreamingManager::new());
    let loader = AssetLoader::new(manager.clone());

    // 1. Already resident: completes before the call returns
    let title = AssetPath::parse("/Game/UI/Title.Title").unwrap();
    manager.insert_object(
        title.clone(),
        Arc::new(Widget {
            title: "Main Menu".to_string(),
        }),
    );
    let resident = loader.load_async(SoftObjectPtr::<Widget>::new(title));
    println!("Resident ready immediately: {}", resident.is_ready());

    // 2. Streamed: completes when the manager pumps, here on a worker thread
    let inventory = AssetPath::parse("/Game/UI/Inventory.Inventory").unwrap();
    manager.stage_object(
        inventory.clone(),
        Arc::new(Widget {
            title: "Inventory".to_string(),
        }),
    );
    let streamed = loader.load_async(SoftObjectPtr::<Widget>::new(inventory.clone()));

    // 3. Callback bound to an owner
    let hud = Arc::new(Hud);
    load_soft_async!(
        loader,
        SoftObjectPtr::<Widget>::new(inventory),
        &hud,
        on_widget_loaded
    );

    // 4. Missing asset: completes with None and is reported
    let missing = loader.load_async(SoftObjectPtr::<Widget>::parse("/Game/UI/Missing").unwrap());

    let pump = {
        let manager = manager.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(5));
            manager.pump()
        })
    };

    println!("Streamed: {:?}", streamed.wait().and_then(|w| w.get()));
    println!("Missing resolved: {}", missing.wait().is_some());
    println!("Completed {} requests", pump.join().unwrap());
    println!("Stats: {:?}", loader.stats());
}
