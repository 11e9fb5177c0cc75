use classic_collections::{BinaryTreeSet, ChainedHashMap, DoublyLinkedList};

fn main() {
    println!("\n[BinaryTreeSet]\n");

    let mut tree: BinaryTreeSet<u32> = [20, 10, 30, 15, 35, 25, 9, 32, 7].into_iter().collect();
    println!("{tree:?}");
    if let Ok(inorder) = tree.inorder() {
        println!("inorder: {:?}", inorder.collect::<Vec<_>>());
    }

    println!("remove 30: {:?}", tree.remove(&30));
    if let Ok(inorder) = tree.inorder() {
        println!("inorder: {:?}", inorder.collect::<Vec<_>>());
    }

    println!("find 33: {:?}", tree.find(&33));
    println!("find 9: {:?}", tree.find(&9));

    if let Ok(preorder) = tree.preorder() {
        println!("preorder: {:?}", preorder.collect::<Vec<_>>());
    }
    if let Ok(postorder) = tree.postorder() {
        println!("postorder: {:?}", postorder.collect::<Vec<_>>());
    }

    println!("\n[ChainedHashMap]\n");

    let mut contacts: ChainedHashMap<&str, &str> = ChainedHashMap::new();
    contacts.insert("Bob", "550-889");
    contacts.insert("John", "510-819");
    contacts.insert("Jill", "110-119");
    contacts.insert("Damian", "919-127");
    println!("{contacts:?}");

    println!("get John: {:?}", contacts.get("John"));
    println!("get Albert: {:?}", contacts.get("Albert"));

    println!("update Jill: {:?}", contacts.insert("Jill", "121-119"));
    println!("remove Jill: {:?}", contacts.remove("Jill"));
    println!("get Jill: {:?}", contacts.get("Jill"));
    println!("{contacts}");

    println!("\n[DoublyLinkedList]\n");

    let mut list: DoublyLinkedList<u32> =
        [20, 10, 12, 13, 14, 30, 22, 21, 32, 33, 35].into_iter().collect();
    list.push_front(5);
    println!("{list}");

    println!("find 60: {:?}", list.find(&60));
    println!("find 22: {:?}", list.find(&22));

    println!("remove 14: {:?}", list.remove(&14));
    println!("{list}");
    println!("front: {:?}, back: {:?}", list.front(), list.back());
}
